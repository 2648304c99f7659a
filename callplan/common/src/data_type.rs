use std::fmt;
use std::sync::Arc;

use arrow::datatypes::{
    DataType, Field as ArrowField, Fields as ArrowFields, Schema as ArrowSchema,
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Name of the single column produced by a procedure whose output type is not a record.
pub const RESULT_FIELD_NAME: &str = "result";

const LIST_ITEM_FIELD_NAME: &str = "item";

/// A declared type, as it appears in procedure signatures and plan schemas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Boolean,
    String,
    Array(Box<LogicalType>),
    Record(Vec<DataField>),
    Null,
}

impl LogicalType {
    #[inline]
    pub fn to_arrow_data_type(&self) -> DataType {
        match self {
            LogicalType::Int8 => DataType::Int8,
            LogicalType::Int16 => DataType::Int16,
            LogicalType::Int32 => DataType::Int32,
            LogicalType::Int64 => DataType::Int64,
            LogicalType::UInt8 => DataType::UInt8,
            LogicalType::UInt16 => DataType::UInt16,
            LogicalType::UInt32 => DataType::UInt32,
            LogicalType::UInt64 => DataType::UInt64,
            LogicalType::Float32 => DataType::Float32,
            LogicalType::Float64 => DataType::Float64,
            LogicalType::Boolean => DataType::Boolean,
            LogicalType::String => DataType::Utf8,
            LogicalType::Array(element) => DataType::List(Arc::new(ArrowField::new(
                LIST_ITEM_FIELD_NAME,
                element.to_arrow_data_type(),
                true,
            ))),
            LogicalType::Record(fields) => {
                let fields: ArrowFields = fields.iter().map(DataField::to_arrow_field).collect();
                DataType::Struct(fields)
            }
            LogicalType::Null => DataType::Null,
        }
    }

    /// Returns the output columns of a procedure declaring `self` as its return type.
    ///
    /// Records expose their fields directly, any other type is wrapped in a single nullable
    /// [`RESULT_FIELD_NAME`] column, and `Null` produces no columns at all.
    pub fn to_output_schema(&self) -> Option<DataSchemaRef> {
        match self {
            LogicalType::Null => None,
            LogicalType::Record(fields) => Some(Arc::new(DataSchema::new(fields.clone()))),
            ty => Some(Arc::new(DataSchema::new(vec![DataField::new(
                RESULT_FIELD_NAME.to_string(),
                ty.clone(),
                true,
            )]))),
        }
    }
}

impl fmt::Display for LogicalType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalType::Int8 => write!(f, "TINYINT"),
            LogicalType::Int16 => write!(f, "SMALLINT"),
            LogicalType::Int32 => write!(f, "INT"),
            LogicalType::Int64 => write!(f, "BIGINT"),
            LogicalType::UInt8 => write!(f, "TINYINT UNSIGNED"),
            LogicalType::UInt16 => write!(f, "SMALLINT UNSIGNED"),
            LogicalType::UInt32 => write!(f, "INT UNSIGNED"),
            LogicalType::UInt64 => write!(f, "BIGINT UNSIGNED"),
            LogicalType::Float32 => write!(f, "FLOAT"),
            LogicalType::Float64 => write!(f, "DOUBLE"),
            LogicalType::Boolean => write!(f, "BOOLEAN"),
            LogicalType::String => write!(f, "STRING"),
            LogicalType::Array(element) => write!(f, "ARRAY<{element}>"),
            LogicalType::Record(fields) => write!(f, "ROW<{}>", fields.iter().join(", ")),
            LogicalType::Null => write!(f, "NULL"),
        }
    }
}

pub type DataSchemaRef = Arc<DataSchema>;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSchema(Vec<DataField>);

impl DataSchema {
    #[inline]
    pub fn new(fields: Vec<DataField>) -> Self {
        Self(fields)
    }

    pub fn get_field_by_name(&self, name: &str) -> Option<&DataField> {
        self.0.iter().find(|field| field.name() == name)
    }

    #[inline]
    pub fn fields(&self) -> &[DataField] {
        &self.0
    }

    #[inline]
    pub fn to_arrow_schema(&self) -> ArrowSchema {
        let fields: ArrowFields = self.0.iter().map(DataField::to_arrow_field).collect();
        ArrowSchema::new(fields)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataField {
    name: String,
    ty: LogicalType,
    nullable: bool,
}

impl DataField {
    #[inline]
    pub fn new(name: String, ty: LogicalType, nullable: bool) -> Self {
        Self { name, ty, nullable }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn ty(&self) -> &LogicalType {
        &self.ty
    }

    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[inline]
    pub fn to_arrow_field(&self) -> ArrowField {
        ArrowField::new(
            self.name.clone(),
            self.ty.to_arrow_data_type(),
            self.nullable,
        )
    }
}

impl fmt::Display for DataField {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.ty)?;
        if !self.nullable {
            write!(f, " NOT NULL")?;
        }
        Ok(())
    }
}
