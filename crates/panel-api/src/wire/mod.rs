// Raw wire model of the panel's client API.

mod envelope;
mod types;

pub use envelope::{
    Document, Envelope, ListMeta, NoRelationships, NumberOrString, RawPaginationMeta, Resource,
    StringOrList, Wire, WireList,
};
pub use types::*;
