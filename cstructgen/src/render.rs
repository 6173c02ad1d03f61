//! Header rendering.
//!
//! Serializes accumulated struct definitions into C header text. Output is
//! deterministic: includes and record names are sorted lexicographically,
//! while fields within a record keep their source declaration order.

use crate::defs::{IncludeSet, StructDefs};
use std::fmt::Write;

/// Renders the accumulated definitions as a complete C header guarded by
/// `guard`.
#[must_use]
pub fn render_header(defs: &StructDefs, includes: &IncludeSet, guard: &str) -> String {
    let mut out = String::new();
    push_prologue(&mut out, guard);
    push_includes(&mut out, includes);
    out.push_str("#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n");
    push_structs(&mut out, defs);
    out.push_str("#ifdef __cplusplus\n}\n#endif\n\n");
    out.push_str("#endif\n");
    out
}

fn push_prologue(out: &mut String, guard: &str) {
    let _ = writeln!(out, "#ifndef {guard}");
    let _ = writeln!(out, "#define {guard}");
    out.push('\n');
    out.push_str("// File generated by cstructgen - DO NOT EDIT\n");
    out.push_str("// Struct definitions generated for C from Rust struct definitions\n");
    out.push('\n');
}

fn push_includes(out: &mut String, includes: &IncludeSet) {
    let mut sorted: Vec<&str> = includes.iter().copied().collect();
    sorted.sort_unstable();
    for include in sorted {
        let _ = writeln!(out, "#include {include}");
    }
    out.push('\n');
}

fn push_structs(out: &mut String, defs: &StructDefs) {
    let mut names: Vec<&str> = defs.keys().map(String::as_str).collect();
    names.sort_unstable();
    for name in names {
        let _ = writeln!(out, "\ttypedef struct {name}{{");
        for field in &defs[name] {
            let _ = writeln!(out, "\t\t{field};");
        }
        let _ = writeln!(out, "\t}} {name}_t;");
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{StructField, TypeModifier};

    #[test]
    fn test_single_struct_header() {
        let defs = StructDefs::from([(
            "s1".to_string(),
            vec![StructField::new(TypeModifier::None, "int8_t", "f1")],
        )]);
        let includes = IncludeSet::from(["<stdint.h>"]);

        let expected = concat!(
            "#ifndef HEADER_GUARD\n",
            "#define HEADER_GUARD\n",
            "\n",
            "// File generated by cstructgen - DO NOT EDIT\n",
            "// Struct definitions generated for C from Rust struct definitions\n",
            "\n",
            "#include <stdint.h>\n",
            "\n",
            "#ifdef __cplusplus\n",
            "extern \"C\" {\n",
            "#endif\n",
            "\n",
            "\ttypedef struct s1{\n",
            "\t\tint8_t f1;\n",
            "\t} s1_t;\n",
            "\n",
            "#ifdef __cplusplus\n",
            "}\n",
            "#endif\n",
            "\n",
            "#endif\n",
        );
        assert_eq!(render_header(&defs, &includes, "HEADER_GUARD"), expected);
    }

    #[test]
    fn test_includes_sorted() {
        let defs = StructDefs::new();
        let includes = IncludeSet::from(["<stdint.h>", "<stdbool.h>"]);
        let rendered = render_header(&defs, &includes, "G");

        let stdbool = rendered.find("#include <stdbool.h>").unwrap();
        let stdint = rendered.find("#include <stdint.h>").unwrap();
        assert!(stdbool < stdint);
    }

    #[test]
    fn test_structs_sorted_by_name() {
        let defs = StructDefs::from([
            (
                "s2".to_string(),
                vec![StructField::new(TypeModifier::None, "bool", "b")],
            ),
            (
                "s1".to_string(),
                vec![StructField::new(TypeModifier::None, "float", "a")],
            ),
        ]);
        let rendered = render_header(&defs, &IncludeSet::new(), "G");

        let s1 = rendered.find("typedef struct s1{").unwrap();
        let s2 = rendered.find("typedef struct s2{").unwrap();
        assert!(s1 < s2);
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let defs = StructDefs::from([(
            "s1".to_string(),
            vec![
                StructField::new(TypeModifier::None, "uint8_t", "z"),
                StructField::new(TypeModifier::None, "uint8_t", "a"),
            ],
        )]);
        let rendered = render_header(&defs, &IncludeSet::new(), "G");

        let z = rendered.find("uint8_t z;").unwrap();
        let a = rendered.find("uint8_t a;").unwrap();
        assert!(z < a);
    }
}
