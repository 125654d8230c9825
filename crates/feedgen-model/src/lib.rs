pub mod error;
pub mod mapping;
pub mod record;
pub mod report;
pub mod schema;
pub mod value;

pub use error::{FeedError, Result};
pub use mapping::{MappingRule, MappingSource, ParentFallback, TransformerInvocation};
pub use record::{FeedAttributes, ProductRecord};
pub use report::{FeedRunReport, ProductIssues};
pub use schema::{
    AttributeSpec, ConditionalRule, CustomCheckFn, CustomTransformFn, EnumNormalizer, FeedFormat,
    FormatRule, PlatformSchema,
};
pub use value::AttrValue;
