/*! # uhmazing

Annotation quality tooling for the uh-mazing multilingual disfluency corpus.

Disfluencies are marked in the annotated texts by surrounding them with underscores
(`I _uh_ think`). The crate loads the annotated dataset, checks the markers,
selects texts to send back to annotators, computes per-language statistics
and creates the Google Forms used to collect translations and re-annotations.

Every batch job is a [pipelines::Pipeline], usable from the `uhmazing` binary or as a library.
!*/
pub mod cli;
pub mod error;
pub mod filtering;
pub mod forms;
pub mod io;
pub mod lang;
pub mod pipelines;
pub mod processing;
pub mod spans;
pub mod transformers;
