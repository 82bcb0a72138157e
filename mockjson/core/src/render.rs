use crate::descriptor::FunctionDescriptor;
use crate::tree::{ParsedTree, Submodule};

const INDENT: &str = "  ";

/// Render the whole tree as Flow `declare module` blocks.
///
/// Functions of the default-marker submodule sit directly in `module.exports`;
/// every other submodule becomes a nested property block.
pub fn render_flow(tree: &ParsedTree, marker: &str) -> String {
	let mut out = String::new();
	for (module_name, module) in tree.modules() {
		out.push_str(&format!("declare module \"{}\" {{\n", module_name));
		out.push_str(&format!("{}declare module.exports: {{\n", INDENT));
		for (submodule_name, submodule) in module.submodules() {
			if submodule_name == marker {
				for line in function_lines(submodule, marker) {
					out.push_str(&format!("{}{},\n", INDENT.repeat(2), line));
				}
			} else {
				out.push_str(&format!("{}{}: {{\n", INDENT.repeat(2), submodule_name));
				let body = function_lines(submodule, marker)
					.map(|line| format!("{}{}", INDENT.repeat(3), line))
					.collect::<Vec<_>>()
					.join(",\n");
				if !body.is_empty() {
					out.push_str(&body);
					out.push('\n');
				}
				out.push_str(&format!("{}}},\n", INDENT.repeat(2)));
			}
		}
		out.push_str(&format!("{}}}\n", INDENT));
		out.push_str("}\n");
	}
	out
}

fn function_lines<'a>(
	submodule: &'a Submodule,
	marker: &'a str,
) -> impl Iterator<Item = String> + 'a {
	submodule.functions().map(move |(name, function)| flow_function(name, function, marker))
}

/// `name(a:type, b:type): returnType`, with no name for the default marker.
pub fn flow_function(name: &str, function: &FunctionDescriptor, marker: &str) -> String {
	let name = if name == marker { "" } else { name };
	let args = function.args.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
	format!("{}({}): {}", name, args, function.returns.ty)
}
