use minijinja::{context, Environment};

use swagen_core::ir::{ApiModel, ApiModule};
use swagen_core::transform::naming::pascal_segment;
use swagen_core::transform::SchemaIndex;

use super::dtos::{emit_dtos, ReachableDtos};
use super::operations::emit_operation;
use crate::generator::GenerateError;

/// Emit one module's complete source unit: collaborator imports, parameter
/// interfaces and callables in document order, then the DTO closure.
///
/// The reachable-DTO set lives and dies inside this call.
pub fn emit_module(
    model: &ApiModel,
    module: &ApiModule,
    index: &SchemaIndex<'_>,
) -> Result<String, GenerateError> {
    let module_pascal = pascal_segment(&module.name);

    let mut dtos = ReachableDtos::new();

    let operations: Vec<_> = module
        .operations
        .iter()
        .map(|&i| emit_operation(&model.operations[i], &module_pascal, index, &mut dtos))
        .collect();

    let dto_decls = emit_dtos(index, &mut dtos);

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("module.ts.j2", include_str!("../../templates/module.ts.j2"))?;
    let tmpl = env.get_template("module.ts.j2")?;

    let rendered = tmpl.render(context! {
        operations => operations,
        dtos => dto_decls,
    })?;

    Ok(rendered)
}
