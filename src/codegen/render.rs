use crate::codegen::literal::{id_text, push_c_string};
use crate::labels::registry::Registry;

/// Header included by the generated source unless told otherwise.
pub const DEFAULT_HEADER: &str = "core.h";

/// Render the complete compilation unit for `registry`.
///
/// Output only depends on the registry contents, never on insertion order,
/// so the same label list always produces the same bytes.
pub fn render(registry: &Registry, header: &str) -> String {
    let mut source = String::with_capacity(256 + registry.len() * 96);

    source.push_str("#include \"");
    source.push_str(header);
    source.push_str("\"\n\n");

    source.push_str("char *pg_pbyte_to_string(pg_byte val) {\n");
    push_forward_block(&mut source, registry);
    source.push_str("   return \"\";\n");
    source.push_str("}\n\n");

    source.push_str("pg_byte string_to_pg_byte(char *label) {\n");
    push_reverse_block(&mut source, registry);
    source.push_str("    return 0;\n");
    source.push_str("}\n");

    source
}

/// The id to label `switch`, one case per id in ascending order.
fn push_forward_block(buffer: &mut String, registry: &Registry) {
    buffer.push_str("    switch (val)\n");
    buffer.push_str("    {\n");
    for (id, label) in registry.iter() {
        buffer.push_str("       case ");
        buffer.push_str(id_text(id));
        buffer.push_str(": return ");
        push_c_string(buffer, label);
        buffer.push_str(";\n");
    }
    buffer.push_str("       default: elog(ERROR, \"invalid input value: %d\", val);\n");
    buffer.push_str("    }\n");
}

/// The label to id comparison chain, in the same order as the `switch`.
fn push_reverse_block(buffer: &mut String, registry: &Registry) {
    for (id, label) in registry.iter() {
        buffer.push_str("    if (strcmp(label, ");
        push_c_string(buffer, label);
        buffer.push_str(") == 0) { return ");
        buffer.push_str(id_text(id));
        buffer.push_str("; }\n");
    }
    buffer.push_str("    elog(ERROR, \"invalid input label: %s\", label);\n");
}
