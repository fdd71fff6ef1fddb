use crate::generator::Declarations;

/// Name of the generated declaration file
pub const DECLARATION_FILE_NAME: &str = "actions-kit.d.ts";

/// Module whose accessors are narrowed
pub const CORE_MODULE: &str = "@actions/core";

const HEADER: &str = "/* eslint-disable */\n// @ts-nocheck\n// generated by 'actions-kit'\n";

/// Wrap generated declarations in the fixed `actions-kit.d.ts` layout
pub fn render_declaration_file(declarations: &Declarations) -> String {
    format!(
        "{header}\nimport type * as core from \"{module}\";\n\n{injection}\n\ndeclare module \"{module}\" {{\n\n{augmentation}\n}}\n",
        header = HEADER,
        module = CORE_MODULE,
        injection = declarations.injection,
        augmentation = declarations.augmentation,
    )
}
