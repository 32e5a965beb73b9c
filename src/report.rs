use indexmap::IndexMap;

use crate::code::{ArgRepr, CodeUnit, Instruction, Value};
use crate::flags;
use crate::html::Node;

/// Relative stylesheet filename the document links to; the caller writing
/// the document to disk places the asset under the same name.
pub const STYLESHEET: &str = "style.css";

pub fn generate_report(unit: &CodeUnit) -> String {
    generate_report_with(unit, &flags::default_descriptions())
}

pub fn generate_report_with(unit: &CodeUnit, descriptions: &IndexMap<&str, &str>) -> String {
    let mut body = Node::elem("body");

    // Depth-first worklist over nested units, so every anchor the constants
    // tables link to gets a rendered section.
    let mut worklist = vec![(unit, unit.name.clone())];
    while let Some((unit, anchor)) = worklist.pop() {
        body = body.child(render_section(unit, &anchor, descriptions));
        for value in unit.consts.iter().rev() {
            if let Value::Code(nested) = value {
                worklist.push((nested, unit_anchor(&anchor, &nested.name)));
            }
        }
    }

    let head = Node::elem("head")
        .child(Node::elem("meta").attr("charset", "utf-8"))
        .child(Node::elem("title").child(Node::text(format!("Disassembly of {}", unit.name))))
        .child(
            Node::elem("link")
                .attr("rel", "stylesheet")
                .attr("href", STYLESHEET),
        );

    let doc = Node::elem("html").child(head).child(body);
    format!("<!DOCTYPE html>\n{doc}\n")
}

// Nested units are qualified by their path from the root, so two same-named
// units in different scopes get distinct anchors.
fn unit_anchor(parent: &str, name: &str) -> String {
    format!("{parent}.{name}")
}

fn jump_anchor(anchor: &str, offset: u32) -> String {
    format!("jump_{anchor}_{offset}")
}

fn render_section(unit: &CodeUnit, anchor: &str, descriptions: &IndexMap<&str, &str>) -> Node {
    Node::elem("section")
        .child(
            Node::elem("h1")
                .attr("id", anchor)
                .child(Node::text(unit.name.as_str())),
        )
        .child(render_info(unit, descriptions))
        .child(heading("Constants"))
        .child(render_consts(&unit.consts, anchor))
        .child(heading("Names"))
        .child(render_strings(&unit.names))
        .child(heading("Local variables"))
        .child(render_strings(&unit.varnames))
        .child(heading("Instructions"))
        .child(render_instructions(&unit.instructions, anchor))
        .child(Node::elem("hr"))
}

fn render_info(unit: &CodeUnit, descriptions: &IndexMap<&str, &str>) -> Node {
    let mut flags_line = Node::elem("p").child(Node::text("Flags: "));
    for (i, (name, desc)) in flags::annotate(&unit.flags, descriptions).into_iter().enumerate() {
        if i > 0 {
            flags_line = flags_line.child(Node::text(", "));
        }
        flags_line = flags_line.child(match desc {
            Some(desc) => Node::elem("span").attr("title", desc).child(Node::text(name)),
            None => Node::text(name),
        });
    }

    Node::elem("div")
        .attr("class", "info")
        .child(
            Node::elem("p").child(Node::text("File: ")).child(
                Node::elem("a")
                    .attr("href", format!("file://{}", unit.filepath))
                    .child(Node::text(unit.filepath.as_str())),
            ),
        )
        .child(flags_line)
        .child(Node::elem("p").child(Node::text(format!("Stack size: {}", unit.stack_size))))
}

fn heading(title: &str) -> Node {
    Node::elem("h2").child(Node::text(title))
}

fn table_with_header(columns: &[&str]) -> Node {
    let mut row = Node::elem("tr");
    for column in columns {
        row = row.child(Node::elem("th").child(Node::text(*column)));
    }
    Node::elem("table").child(row)
}

fn cell(content: Node) -> Node {
    Node::elem("td").child(content)
}

fn render_consts(consts: &[Value], anchor: &str) -> Node {
    let mut table = table_with_header(&["Index", "Value", "Type"]);
    for (index, value) in consts.iter().enumerate() {
        let (rendered, type_name) = match value {
            Value::Code(nested) => (
                Node::elem("a")
                    .attr("href", format!("#{}", unit_anchor(anchor, &nested.name)))
                    .child(Node::text(nested.name.as_str())),
                "code",
            ),
            Value::Scalar { type_name, repr } => (
                Node::elem("a")
                    .attr("class", "value")
                    .child(Node::text(repr.as_str())),
                type_name.as_str(),
            ),
        };
        table = table.child(
            Node::elem("tr")
                .child(cell(Node::text(index.to_string())))
                .child(cell(rendered))
                .child(cell(Node::text(type_name))),
        );
    }
    table
}

fn render_strings(names: &[String]) -> Node {
    let mut table = table_with_header(&["Index", "Name"]);
    for (index, name) in names.iter().enumerate() {
        table = table.child(
            Node::elem("tr")
                .child(cell(Node::text(index.to_string())))
                .child(cell(Node::text(name.as_str()))),
        );
    }
    table
}

fn render_instructions(instructions: &[Instruction], anchor: &str) -> Node {
    let mut table = table_with_header(&["Line", "Offset", "Opcode", "Arg", "Value"]);
    for inst in instructions {
        table = table.child(render_instruction_row(inst, anchor));
    }
    table
}

fn render_instruction_row(inst: &Instruction, anchor: &str) -> Node {
    let line = match inst.line_number {
        Some(line) => cell(
            Node::elem("a")
                .attr("class", "lineno")
                .child(Node::text(line.to_string())),
        ),
        None => Node::elem("td"),
    };

    // Anchor ids are a pure function of (unit anchor, offset), so a jump
    // rendered before its target still links correctly in one pass.
    let offset = if inst.is_jump_target {
        cell(
            Node::elem("a")
                .attr("id", jump_anchor(anchor, inst.offset))
                .child(Node::elem("u").child(Node::text(inst.offset.to_string()))),
        )
    } else {
        cell(Node::text(inst.offset.to_string()))
    };

    let opcode = cell(
        Node::elem("a")
            .attr("class", "opcode")
            .child(Node::text(inst.op_name.as_str())),
    );

    let (arg, value) = match inst.arg {
        Some(raw) => (
            cell(Node::text(raw.to_string())),
            render_arg_repr(inst.arg_repr.as_ref(), anchor),
        ),
        None => (Node::elem("td"), Node::elem("td")),
    };

    Node::elem("tr")
        .child(line)
        .child(offset)
        .child(opcode)
        .child(arg)
        .child(value)
}

fn render_arg_repr(arg_repr: Option<&ArgRepr>, anchor: &str) -> Node {
    match arg_repr {
        Some(ArgRepr::Jump { text, target }) => cell(
            Node::elem("a")
                .attr("class", "value")
                .attr("href", format!("#{}", jump_anchor(anchor, *target)))
                .child(Node::text(format!("({text})"))),
        ),
        Some(ArgRepr::Plain(text)) => cell(
            Node::elem("a")
                .attr("class", "value")
                .child(Node::text(format!("({text})"))),
        ),
        None => Node::elem("td"),
    }
}
