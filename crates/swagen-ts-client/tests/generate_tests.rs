use swagen_core::transform::ingest;
use swagen_core::{parse, CodeGenerator, GeneratedFile};
use swagen_ts_client::{GenerateError, ModuleFilter, TsClientConfig, TsClientGenerator};

const IDENTITY: &str = include_str!("../../swagen-core/tests/fixtures/identity.yaml");

fn generate(filter: ModuleFilter) -> Result<Vec<GeneratedFile>, GenerateError> {
    let doc = parse::from_yaml(IDENTITY).unwrap();
    let model = ingest(&doc);
    TsClientGenerator.generate(&model, &TsClientConfig { module: filter })
}

fn file<'a>(files: &'a [GeneratedFile], path: &str) -> &'a str {
    &files
        .iter()
        .find(|f| f.path == path)
        .unwrap_or_else(|| panic!("missing {path}"))
        .content
}

#[test]
fn generation_is_idempotent() {
    let first = generate(ModuleFilter::All).unwrap();
    let second = generate(ModuleFilter::All).unwrap();
    assert_eq!(first, second);
}

#[test]
fn one_file_per_module_plus_support() {
    let files = generate(ModuleFilter::All).unwrap();
    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["roles.ts", "users.ts", "utils.ts"]);
}

#[test]
fn module_filter_selects_one_module() {
    let files = generate(ModuleFilter::from_input("Users")).unwrap();
    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["users.ts", "utils.ts"]);
}

#[test]
fn unknown_module_fails_before_emission() {
    let err = generate(ModuleFilter::from_input("payments")).unwrap_err();
    assert!(matches!(err, GenerateError::ModuleNotFound(_)));
    assert_eq!(err.to_string(), "module [payments] not found");
}

#[test]
fn end_to_end_roles_scenario() {
    let files = generate(ModuleFilter::from_input("roles")).unwrap();
    let roles = file(&files, "roles.ts");

    assert!(roles.contains("import { genQueryPath } from \"./utils\";"));
    assert!(roles.contains("import { http } from \"@/utils/request\";"));

    // Parameter interface: the path parameter, required, with its JSDoc.
    assert!(roles.contains("export interface IdGetItf {"));
    assert!(roles.contains("  /** Role identifier */\n  id: string;"));

    // Callable: stoplist segments and the module token stripped from the name.
    assert!(roles.contains(
        "export async function IdGet(params: IdGetItf): Promise<VoloAbpIdentityRoleDto> {"
    ));
    assert!(roles.contains("  const path: string = `/api/identity/roles/${params.id}`;"));
    assert!(roles.contains("  return http.get(path);"));

    // DTO declaration with nullable → optional marker.
    assert!(roles.contains("export interface VoloAbpIdentityRoleDto {"));
    assert!(roles.contains("  id: string;"));
    assert!(roles.contains("  name?: string;"));
}

#[test]
fn query_parameters_pass_through_as_a_name_list() {
    let files = generate(ModuleFilter::from_input("roles")).unwrap();
    let roles = file(&files, "roles.ts");

    assert!(roles.contains(
        "genQueryPath(params, [\"filter\",\"maxResultCount\"], `/api/identity/roles`)"
    ));
}

#[test]
fn body_argument_only_for_non_get_with_request_type() {
    let files = generate(ModuleFilter::from_input("roles")).unwrap();
    let roles = file(&files, "roles.ts");

    assert!(roles.contains(
        "export async function RolesPost(data: VoloAbpIdentityCreateRoleDto): Promise<VoloAbpIdentityRoleDto> {"
    ));
    assert!(roles.contains("  return http.post(path, data);"));

    // DELETE has no request body: no data argument, no trailing separator.
    assert!(roles.contains(
        "export async function IdDelete(params: IdDeleteItf): Promise<any> {"
    ));
    assert!(roles.contains("  return http.delete(path);"));
    assert!(!roles.contains("data: any"));
}

#[test]
fn dto_emitted_at_most_once_per_module() {
    let files = generate(ModuleFilter::from_input("roles")).unwrap();
    let roles = file(&files, "roles.ts");

    // RoleDto is referenced by three operations and by the paged container.
    let declarations = roles
        .matches("export interface VoloAbpIdentityRoleDto {")
        .count();
    assert_eq!(declarations, 1);
}

#[test]
fn no_dto_leaks_across_modules() {
    let files = generate(ModuleFilter::All).unwrap();
    let roles = file(&files, "roles.ts");
    let users = file(&files, "users.ts");

    assert!(roles.contains("VoloAbpIdentityRoleDto"));
    assert!(!users.contains("VoloAbpIdentityRoleDto"));
    assert!(users.contains("VoloAbpIdentityUserDto"));
    assert!(!roles.contains("VoloAbpIdentityUserDto"));
}

#[test]
fn enum_references_substitute_number() {
    let files = generate(ModuleFilter::from_input("roles")).unwrap();
    let roles = file(&files, "roles.ts");

    assert!(roles.contains("  kind: number;"));
    // The enum schema never surfaces as a declaration of its own.
    assert!(!roles.contains("RoleKind"));
}

#[test]
fn generic_keys_flatten_to_concrete_names() {
    let files = generate(ModuleFilter::from_input("roles")).unwrap();
    let roles = file(&files, "roles.ts");

    assert!(roles.contains(
        "Promise<VoloAbpApplicationDtosPagedResultDto_VoloAbpIdentityRoleDto>"
    ));
    assert!(roles.contains(
        "export interface VoloAbpApplicationDtosPagedResultDto_VoloAbpIdentityRoleDto {"
    ));
    assert!(roles.contains("  totalCount: string;"));
    assert!(roles.contains("  items: VoloAbpIdentityRoleDto[];"));
}

#[test]
fn nested_dto_closure_pulls_field_references() {
    let files = generate(ModuleFilter::from_input("roles")).unwrap();
    let roles = file(&files, "roles.ts");

    // ExtraPropertyDto is reachable only through a DTO field, not from any
    // operation signature.
    assert!(roles.contains("  extraProperties: VoloAbpDataExtraPropertyDto;"));
    assert!(roles.contains("export interface VoloAbpDataExtraPropertyDto {"));
    assert!(roles.contains("  value?: string;"));
}

#[test]
fn users_module_renders_exactly() {
    let files = generate(ModuleFilter::from_input("users")).unwrap();
    let users = file(&files, "users.ts");

    let expected = r#"import { genQueryPath } from "./utils";
import { http } from "@/utils/request";

export interface UsersGetItf {
  filter: string;
}

export async function UsersGet(params: UsersGetItf): Promise<VoloAbpIdentityUserDto> {
  const path: string = genQueryPath(params, ["filter"], `/api/identity/users`);
  return http.get(path);
}

// ---- DTO declarations ----

export interface VoloAbpIdentityUserDto {
  id: string;
  userName: string;
  roleNames: string[];
}
"#;
    assert_eq!(users, expected);
}

#[test]
fn query_path_builder_keeps_contract_text() {
    let files = generate(ModuleFilter::from_input("users")).unwrap();
    let utils = file(&files, "utils.ts");

    assert!(utils.contains("export const genQueryPath"));
    // Only names actually present in the params object survive filtering.
    assert!(utils.contains("query.filter((name: string) => name in params)"));
}
