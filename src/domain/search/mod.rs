//! Search domain

mod entity;

pub use entity::{
    FetchSourceContext, SearchHit, SearchHits, SearchRequest, SearchResponse, SearchSource,
    TotalHits,
};
