//! Drives a whole generator run: parse every template, write the front matter, then
//! expand each template file in order into one [`OutputSet`].

use tracing::{debug, info};

use crate::{
    ast::Chunk,
    codegen::preamble,
    config::GeneratorConfig,
    diagnostics::{to_error_source, SourceArc},
    macros::MacroRegistry,
    mpi::{KnowledgeBase, MpiApi},
    runtime::{evaluate_chunk, EvalContext, OutputSet, Scope, Target},
    syntax::parse_template,
    WrapResult,
};

// ============================================================================
// PARSED TEMPLATES
// ============================================================================

/// One template file, parsed and ready to expand.
#[derive(Debug)]
pub struct Template {
    pub source: SourceArc,
    pub chunks: Vec<Chunk>,
}

// ============================================================================
// GENERATOR
// ============================================================================

/// Borrowed inputs of a run: settings, the extracted API and the macro set.
pub struct Generator<'g> {
    config: &'g GeneratorConfig,
    api: &'g MpiApi,
    knowledge: &'g KnowledgeBase,
    registry: &'g MacroRegistry,
}

impl<'g> Generator<'g> {
    pub fn new(
        config: &'g GeneratorConfig,
        api: &'g MpiApi,
        knowledge: &'g KnowledgeBase,
        registry: &'g MacroRegistry,
    ) -> Self {
        Self {
            config,
            api,
            knowledge,
            registry,
        }
    }

    pub fn parse(&self, name: &str, text: &str) -> WrapResult<Template> {
        let source = to_error_source(name, text);
        let chunks = parse_template(text, &source, self.config.outer_mode(), self.registry)?;
        debug!(template = name, chunks = chunks.len(), "parsed template");
        Ok(Template { source, chunks })
    }

    /// Expands `templates` in order. The caller decides whether to keep the outputs.
    pub fn expand(&self, templates: &[Template], outputs: &mut OutputSet) -> WrapResult<()> {
        outputs.write(&Target::Main, &preamble::front_matter(self.config))?;

        let initial = templates
            .first()
            .map(|t| t.source.clone())
            .unwrap_or_else(|| to_error_source("<none>", ""));
        let mut ctx = EvalContext::new(self.config, self.api, self.knowledge, outputs, initial);

        for (fileno, template) in templates.iter().enumerate() {
            info!(template = template.source.name(), fileno, "expanding template");
            ctx.set_source(template.source.clone());

            let mut root = Scope::root();
            root.include(self.registry);
            root.set_value("fileno", fileno.to_string());

            // Top-level chunks don't share bindings with each other.
            for chunk in &template.chunks {
                let mut scope = Scope::child(&root);
                evaluate_chunk(chunk, &mut ctx, &mut scope)?;
            }
        }
        Ok(())
    }

    /// Parses and expands one in-memory template, returning the main output.
    pub fn expand_to_string(&self, name: &str, text: &str) -> WrapResult<String> {
        let template = self.parse(name, text)?;
        let (mut outputs, buffer) = OutputSet::in_memory();
        self.expand(std::slice::from_ref(&template), &mut outputs)?;
        outputs.finish()?;
        Ok(buffer.contents())
    }
}
