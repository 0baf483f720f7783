/// Emit `utils.ts`, the query-path builder the generated callables import.
pub fn emit_utils() -> String {
    include_str!("../../templates/utils.ts.j2").to_string()
}
