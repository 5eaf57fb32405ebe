/// One independently reduced part of [`crate::state::AppState`].
///
/// `Default` is the pre-login, pre-fetch value; `PartialEq` lets the view
/// cache tell whether anything it reads has moved.
pub trait Slice: Clone + PartialEq + Default + Send + 'static {}
