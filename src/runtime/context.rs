use std::collections::HashSet;

use crate::{
    codegen::preamble,
    config::GeneratorConfig,
    diagnostics::SourceArc,
    err_ctx,
    mpi::{KnowledgeBase, MpiApi},
    runtime::{OutputSet, Target},
    Span, WrapError, WrapResult,
};

/// Everything a macro handler may need while a run is expanding templates.
///
/// One context lives for the whole run, so `fn_num`, `decls` and the once-only flag
/// declarations carry over from one template file to the next.
pub struct EvalContext<'g> {
    pub config: &'g GeneratorConfig,
    pub api: &'g MpiApi,
    pub knowledge: &'g KnowledgeBase,
    outputs: &'g mut OutputSet,
    source: SourceArc,
    target: Target,
    current_function: Option<String>,
    fn_counter: i64,
    declarations: Option<String>,
    emitted_once: HashSet<String>,
}

impl<'g> EvalContext<'g> {
    pub fn new(
        config: &'g GeneratorConfig,
        api: &'g MpiApi,
        knowledge: &'g KnowledgeBase,
        outputs: &'g mut OutputSet,
        source: SourceArc,
    ) -> Self {
        Self {
            config,
            api,
            knowledge,
            outputs,
            source,
            target: Target::Main,
            current_function: None,
            fn_counter: 0,
            declarations: None,
            emitted_once: HashSet::new(),
        }
    }

    pub fn source(&self) -> &SourceArc {
        &self.source
    }

    /// Switches to the next template file.
    pub fn set_source(&mut self, source: SourceArc) {
        self.source = source;
    }

    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------

    pub fn emit(&mut self, text: &str) -> WrapResult<()> {
        self.outputs.write(&self.target, text)
    }

    /// Writes to the main output regardless of the current target.
    pub fn emit_main(&mut self, text: &str) -> WrapResult<()> {
        self.outputs.write(&Target::Main, text)
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Redirects emission, returning the previous target.
    pub fn set_target(&mut self, target: Target) -> Target {
        std::mem::replace(&mut self.target, target)
    }

    /// Returns the static-mode target for `symbol`, creating its file on first use.
    pub fn static_target(&mut self, symbol: &str) -> WrapResult<Target> {
        if !self.outputs.has_static(symbol) {
            let preamble = preamble::static_preamble(self.config, self.declarations.as_deref());
            self.outputs.create_static(symbol, &preamble)?;
        }
        Ok(Target::Static(symbol.to_string()))
    }

    // ------------------------------------------------------------------------
    // Run-wide state
    // ------------------------------------------------------------------------

    pub fn current_function(&self) -> Option<&str> {
        self.current_function.as_deref()
    }

    /// Marks `name` as the function being expanded, returning the previous one.
    pub fn enter_function(&mut self, name: Option<String>) -> Option<String> {
        std::mem::replace(&mut self.current_function, name)
    }

    /// Returns the counter value and advances it.
    pub fn next_fn_num(&mut self) -> i64 {
        let n = self.fn_counter;
        self.fn_counter += 1;
        n
    }

    pub fn declarations(&self) -> Option<&str> {
        self.declarations.as_deref()
    }

    pub fn set_declarations(&mut self, text: String) {
        self.declarations = Some(text);
    }

    /// True the first time it is called for `key` during the run.
    pub fn first_time(&mut self, key: &str) -> bool {
        self.emitted_once.insert(key.to_string())
    }

    // ------------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------------

    /// Builds an expansion error pointing at `span` of the current template.
    pub fn error(&self, message: impl Into<String>, span: Span) -> WrapError {
        let message: String = message.into();
        err_ctx!(Syntax, message, &self.source, span).while_handling(self.current_function())
    }
}
