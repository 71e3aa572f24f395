/*! Survey creation

Builds the Google Forms used to collect translations and re-annotations:
- [plan] decides which rows go into which form,
- [builder] creates them through a [FormsApi],
- [api] holds the REST implementation of [FormsApi].
!*/
pub mod api;
pub mod builder;
mod items;
pub mod plan;
mod template;

pub use api::{FormsApi, GoogleForms};
pub use builder::{FormBuilder, FormMapping, FormResult};
pub use items::{FormItem, DEFAULT_COMPLETION_CODE};
pub use plan::{plan_reannotation, plan_translation, FormPlan, TargetRow, TranslationRow};
pub use template::BaseForm;
