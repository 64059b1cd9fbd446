pub mod admin_gate;
pub mod cors;
pub mod identity;
pub mod request_trace;
pub mod structured_logger;
pub mod trace_span;

pub use admin_gate::AdminGate;
pub use cors::cors_middleware;
pub use identity::Identity;
pub use request_trace::RequestTrace;
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;
