/*! Text transformers.

Annotators add re-annotation reasons to a [LangText],
transforms rewrite its content.

!*/

mod annotate;
mod long_disfluency;
mod missing_markers;
mod strip_markers;
mod text;
mod transform;

pub use annotate::{Annotate, Annotator};
pub use long_disfluency::LongDisfluency;
pub use missing_markers::MissingMarkers;
pub use strip_markers::StripMarkers;
pub use text::{LangText, Reason};
pub use transform::Transform;
