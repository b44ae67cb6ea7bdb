// Domain models (wire types shared by browser and server)
// Pure Rust, no framework dependencies

pub mod member;
pub mod screening;
pub mod chat;

pub use member::{NetworkMember, WorkHistoryEntry};
pub use screening::{
    AnswerQueryRequest, AnswerQueryResponse, ErrorResponse, PingResponse, QueriesResponse,
    ScreeningResults, ScreeningStatus, StartScreeningResponse, COMPLETED_LABEL,
};
pub use chat::{ChatMessage, ChatRole};
