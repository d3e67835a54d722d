//! Resume layout variants.
//! Each template maps a `ResumeData` record to a document tree; no template may
//! mutate its input or depend on anything beyond it.

pub mod compact;
pub mod sections;

use crate::models::resume::ResumeData;
use crate::render::Node;

pub use compact::CompactTemplate;
pub use sections::Section;

/// A visual layout for a resume record.
pub trait ResumeTemplate: Send + Sync {
    /// Name used to select the template over the API.
    fn name(&self) -> &'static str;

    /// Renders the record into a document tree. Must be deterministic.
    fn render(&self, data: &ResumeData) -> Node;

    /// Titled sections this layout shows for `data`, in document order.
    fn visible_sections(&self, data: &ResumeData) -> Vec<Section>;
}

/// Lookup table of available templates, in registration order.
pub struct TemplateRegistry {
    templates: Vec<Box<dyn ResumeTemplate>>,
}

impl TemplateRegistry {
    pub fn empty() -> Self {
        Self {
            templates: Vec::new(),
        }
    }

    /// Registry with every built-in layout.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(CompactTemplate));
        registry
    }

    /// Adds a template; a later registration under the same name replaces the earlier one.
    pub fn register(&mut self, template: Box<dyn ResumeTemplate>) {
        self.templates.retain(|t| t.name() != template.name());
        self.templates.push(template);
    }

    pub fn get(&self, name: &str) -> Option<&dyn ResumeTemplate> {
        self.templates
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.templates.iter().map(|t| t.name()).collect()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
