use crate::errors::DtsError;
use crate::globals::{select_globals, InjectedGlobal};
use actions_kit_config::InjectMode;
use actions_kit_manifest::{FieldKind, Manifest};

/// Generated declaration text, before it is placed in the file wrapper
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    /// Globals the injection block declares, in declaration order
    pub globals: Vec<InjectedGlobal>,
    /// `declare global { ... }` block, empty when nothing is injected
    pub injection: String,
    /// Body of the `declare module "@actions/core"` augmentation
    pub augmentation: String,
}

/// Generate declarations for a manifest.
///
/// Fails when `inject` selects a mapping the manifest lacks.
pub fn generate(manifest: &Manifest, inject: InjectMode) -> Result<Declarations, DtsError> {
    let globals = select_globals(manifest, inject)?;

    Ok(Declarations {
        injection: render_injection(&globals),
        augmentation: render_augmentation(manifest),
        globals,
    })
}

/// Render the ambient global block for already-selected globals
pub fn render_injection(globals: &[InjectedGlobal]) -> String {
    if globals.is_empty() {
        return String::new();
    }

    let mut code = String::from("declare global {\n");
    for global in globals {
        code.push_str(&format!("  export const {} = {{\n", global.name()));
        for name in &global.names {
            let literal = quote(name);
            code.push_str(&format!("    {}: {},\n", literal, literal));
        }
        code.push_str("  };\n\n");
    }
    code.push('}');
    code
}

/// Render accessor narrowings for every mapping the manifest declares
pub fn render_augmentation(manifest: &Manifest) -> String {
    let mut code = String::new();

    for kind in [FieldKind::Inputs, FieldKind::Outputs] {
        let Some(fields) = manifest.fields(kind) else {
            continue;
        };

        let union = if fields.is_empty() {
            "never".to_string()
        } else {
            fields.names().map(quote).collect::<Vec<_>>().join(" | ")
        };

        code.push_str(&format!("  type {} = {};\n\n", kind.type_name(), union));
        code.push_str(&format!("  {}\n\n", accessor_signature(kind)));
    }

    code
}

fn accessor_signature(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Inputs => {
            "export function getInput(name: ActionInputName, options?: core.InputOptions): string;"
        }
        FieldKind::Outputs => "export function setOutput(name: ActionOutputName, value: any): void;",
    }
}

/// Quote a name as a string literal valid in both JSON and TypeScript
fn quote(name: &str) -> String {
    serde_json::Value::from(name).to_string()
}
