//! Launch form sections that depend on the container variant

use crate::builder::form::FormSnapshot;

/// Which variant-specific sections of the launch form are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionVisibility {
    /// Free-text image input
    pub image_field: bool,
    /// Desktop profile selector
    pub desktop_field: bool,
    /// Desktop-only options block
    pub desktop_options: bool,
}

/// Section visibility for the variant currently selected on the form
pub fn section_visibility(form: &FormSnapshot) -> SectionVisibility {
    let desktop = form.is_desktop();
    SectionVisibility {
        image_field: !desktop,
        desktop_field: desktop,
        desktop_options: desktop,
    }
}
