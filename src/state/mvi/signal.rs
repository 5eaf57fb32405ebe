/// Something that happened: a user intent or the outcome of a service call
/// (`*Request`, `*Success`, `*Failure`).
pub trait Signal: Send + 'static {}
