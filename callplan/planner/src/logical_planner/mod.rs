mod call;

pub use call::plan_call;
