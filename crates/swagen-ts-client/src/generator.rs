use log::debug;
use thiserror::Error;

use swagen_core::ir::{ApiModel, ApiModule};
use swagen_core::transform::SchemaIndex;
use swagen_core::{CodeGenerator, GeneratedFile};

use crate::emitters::module::emit_module;
use crate::emitters::support::emit_utils;

/// Sentinel module name requesting every module.
pub const ALL_MODULES: &str = "allapi";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("module [{0}] not found")]
    ModuleNotFound(String),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Which modules to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleFilter {
    All,
    Named(String),
}

impl ModuleFilter {
    /// Interpret a user-supplied module name; matching is case-insensitive
    /// because module keys are lower-cased tags.
    pub fn from_input(input: &str) -> Self {
        if input.eq_ignore_ascii_case(ALL_MODULES) {
            ModuleFilter::All
        } else {
            ModuleFilter::Named(input.to_lowercase())
        }
    }

    fn matches(&self, module: &ApiModule) -> bool {
        match self {
            ModuleFilter::All => true,
            ModuleFilter::Named(name) => module.name == *name,
        }
    }

    fn describe(&self) -> &str {
        match self {
            ModuleFilter::All => ALL_MODULES,
            ModuleFilter::Named(name) => name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TsClientConfig {
    pub module: ModuleFilter,
}

impl Default for TsClientConfig {
    fn default() -> Self {
        Self {
            module: ModuleFilter::All,
        }
    }
}

/// TypeScript API-module generator: one `<module>.ts` source unit per
/// selected module, plus the `utils.ts` support file.
pub struct TsClientGenerator;

impl CodeGenerator for TsClientGenerator {
    type Config = TsClientConfig;
    type Error = GenerateError;

    fn generate(
        &self,
        model: &ApiModel,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error> {
        let selected: Vec<&ApiModule> = model
            .modules
            .iter()
            .filter(|m| config.module.matches(m))
            .collect();

        if selected.is_empty() {
            return Err(GenerateError::ModuleNotFound(
                config.module.describe().to_string(),
            ));
        }

        let index = SchemaIndex::new(&model.schemas);

        let mut files = Vec::new();
        for module in selected {
            debug!("emitting module {}", module.name);
            files.push(GeneratedFile {
                path: format!("{}.ts", module.name),
                content: emit_module(model, module, &index)?,
            });
        }

        files.push(GeneratedFile {
            path: "utils.ts".to_string(),
            content: emit_utils(),
        });

        Ok(files)
    }
}
