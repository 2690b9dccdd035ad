//! Python node shapes read from the tree-sitter concrete syntax tree.
//!
//! The checks reason in terms of Python's own AST (names, attributes,
//! call arguments, constant strings). These helpers recover those views
//! from tree-sitter-python nodes, treating parentheses as transparent.

use qgis_lint_core::syntax::named_children;
use qgis_lint_core::SourceTree;
use std::ops::Range;
use tree_sitter::Node;

/// Strips any number of `( ... )` wrappers around an expression.
#[must_use]
pub fn unparen(mut node: Node<'_>) -> Node<'_> {
    while node.kind() == "parenthesized_expression" {
        match significant_children(node).as_slice() {
            [inner] => node = *inner,
            _ => break,
        }
    }
    node
}

/// Named children of `node` without comments.
#[must_use]
pub fn significant_children(node: Node<'_>) -> Vec<Node<'_>> {
    named_children(node)
        .into_iter()
        .filter(|n| n.kind() != "comment")
        .collect()
}

/// Returns true if `node` has an anonymous `,` child.
fn has_trailing_comma(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|c| !c.is_named() && c.kind() == ",");
    found
}

/// The identifier of a bare name expression.
#[must_use]
pub fn name_id<'s>(tree: &'s SourceTree, node: Node<'_>) -> Option<&'s str> {
    let node = unparen(node);
    (node.kind() == "identifier").then(|| tree.text(node))
}

/// `object.attr` split into its parts.
#[derive(Debug, Clone, Copy)]
pub struct Attribute<'t, 's> {
    /// The expression before the dot, with parentheses stripped.
    pub object: Node<'t>,
    /// The member name after the dot.
    pub attr: &'s str,
}

/// Reads an `attribute` node.
#[must_use]
pub fn attribute<'t, 's>(tree: &'s SourceTree, node: Node<'t>) -> Option<Attribute<'t, 's>> {
    let node = unparen(node);
    if node.kind() != "attribute" {
        return None;
    }
    let object = node.child_by_field_name("object")?;
    let attr = node.child_by_field_name("attribute")?;
    Some(Attribute {
        object: unparen(object),
        attr: tree.text(attr),
    })
}

/// The callee of a `call` node, with parentheses stripped.
#[must_use]
pub fn call_function(node: Node<'_>) -> Option<Node<'_>> {
    node.child_by_field_name("function").map(unparen)
}

/// Arguments of a call, split the way Python's AST splits them.
#[derive(Debug, Default)]
pub struct CallArgs<'t, 's> {
    /// Positional arguments, `*splat` entries included.
    pub positional: Vec<Node<'t>>,
    /// Keyword arguments; `**splat` entries have no name.
    pub keywords: Vec<(Option<&'s str>, Node<'t>)>,
}

impl<'t, 's> CallArgs<'t, 's> {
    /// The value of the keyword argument `name`, if present.
    #[must_use]
    pub fn keyword(&self, name: &str) -> Option<Node<'t>> {
        self.keywords
            .iter()
            .find(|(key, _)| *key == Some(name))
            .map(|(_, value)| *value)
    }
}

/// Collects the arguments of a `call` node.
#[must_use]
pub fn call_args<'t, 's>(tree: &'s SourceTree, call: Node<'t>) -> CallArgs<'t, 's> {
    let mut args = CallArgs::default();
    let Some(arguments) = call.child_by_field_name("arguments") else {
        return args;
    };

    if arguments.kind() == "generator_expression" {
        args.positional.push(arguments);
        return args;
    }

    for child in significant_children(arguments) {
        match child.kind() {
            "keyword_argument" => {
                let name = child.child_by_field_name("name").map(|n| tree.text(n));
                if let Some(value) = child.child_by_field_name("value") {
                    args.keywords.push((name, unparen(value)));
                }
            }
            "dictionary_splat" => args.keywords.push((None, child)),
            _ => args.positional.push(unparen(child)),
        }
    }
    args
}

/// The subscript expression of `value[index]` when exactly one index is given.
#[must_use]
pub fn single_subscript(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let indices: Vec<Node<'_>> = node
        .children_by_field_name("subscript", &mut cursor)
        .collect();
    match indices.as_slice() {
        [index] if !has_trailing_comma(node) => Some(unparen(*index)),
        _ => None,
    }
}

/// The value of a plain string literal.
///
/// Covers `string` and implicitly concatenated strings. Returns `None` for
/// f-strings and bytes literals, which are not plain `str` constants.
#[must_use]
pub fn string_value(tree: &SourceTree, node: Node<'_>) -> Option<String> {
    match node.kind() {
        "string" => literal_value(tree.text(node)),
        "concatenated_string" => significant_children(node)
            .into_iter()
            .map(|part| literal_value(tree.text(part)))
            .collect(),
        _ => None,
    }
}

fn literal_value(text: &str) -> Option<String> {
    let (prefix, body) = split_literal(text)?;
    if prefix.contains(['f', 'b', 't']) {
        return None;
    }
    Some(decode(&prefix, text.get(body)?))
}

/// The constant strings Python holds for a string literal.
///
/// A plain literal yields its value. An f-string yields the literal runs
/// between its interpolations, with runs of adjacent concatenated parts
/// merged and empty runs dropped. Bytes and template strings yield nothing.
#[must_use]
pub fn string_constants(tree: &SourceTree, node: Node<'_>) -> Vec<String> {
    let parts = match node.kind() {
        "string" => vec![node],
        "concatenated_string" => significant_children(node),
        _ => return Vec::new(),
    };
    let formatted = parts.iter().any(|part| {
        split_literal(tree.text(*part)).is_some_and(|(prefix, _)| prefix.contains('f'))
    });
    if !formatted {
        return string_value(tree, node).into_iter().collect();
    }

    let mut runs = Vec::new();
    let mut current = String::new();
    for part in parts {
        let text = tree.text(part);
        let Some((prefix, body)) = split_literal(text) else {
            return Vec::new();
        };
        if prefix.contains(['b', 't']) {
            return Vec::new();
        }
        if !prefix.contains('f') {
            current.push_str(&decode(&prefix, text.get(body).unwrap_or_default()));
            continue;
        }

        let base = part.start_byte();
        let mut cursor = body.start;
        for interpolation in named_children(part)
            .into_iter()
            .filter(|child| child.kind() == "interpolation")
        {
            let start = interpolation.start_byte().saturating_sub(base);
            let run = text.get(cursor..start).unwrap_or_default();
            current.push_str(&decode_formatted(&prefix, run));
            if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
            cursor = interpolation.end_byte().saturating_sub(base);
        }
        let run = text.get(cursor..body.end).unwrap_or_default();
        current.push_str(&decode_formatted(&prefix, run));
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Lower-cased prefix and the byte range of the body within `text`.
fn split_literal(text: &str) -> Option<(String, Range<usize>)> {
    let quote_at = text.find(['\'', '"'])?;
    let (prefix, rest) = text.split_at(quote_at);

    let quote = rest.chars().next()?;
    let triple: String = std::iter::repeat(quote).take(3).collect();
    let width = if rest.len() >= 6 && rest.starts_with(&triple) && rest.ends_with(&triple) {
        3
    } else {
        1
    };
    let start = quote_at + width;
    let end = text.len().checked_sub(width)?;
    (start <= end).then(|| (prefix.to_ascii_lowercase(), start..end))
}

fn decode(prefix: &str, body: &str) -> String {
    if prefix.contains('r') {
        body.to_string()
    } else {
        unescape(body)
    }
}

fn decode_formatted(prefix: &str, run: &str) -> String {
    decode(prefix, &run.replace("{{", "{").replace("}}", "}"))
}

/// Resolves Python backslash escapes in a non-raw string body.
fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(next) = chars.next() else {
            out.push('\\');
            break;
        };
        match next {
            '\n' => {}
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\u{7}'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{b}'),
            '0'..='7' => {
                let mut digits = String::from(next);
                while digits.len() < 3 {
                    match chars.peek() {
                        Some(d @ '0'..='7') => {
                            digits.push(*d);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                push_code_point(&mut out, &digits, 8, &digits);
            }
            'x' | 'u' | 'U' => {
                let len = match next {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = (0..len)
                    .map_while(|_| chars.next_if(char::is_ascii_hexdigit))
                    .collect();
                let raw = format!("{next}{digits}");
                if digits.len() == len {
                    push_code_point(&mut out, &digits, 16, &raw);
                } else {
                    out.push('\\');
                    out.push_str(&raw);
                }
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    out
}

fn push_code_point(out: &mut String, digits: &str, radix: u32, raw: &str) {
    match u32::from_str_radix(digits, radix).ok().and_then(char::from_u32) {
        Some(c) => out.push(c),
        None => {
            out.push('\\');
            out.push_str(raw);
        }
    }
}

/// Module and imported names of a `from ... import ...` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFrom {
    /// Dotted module path; `None` for `from . import x`.
    pub module: Option<String>,
    /// Original (un-aliased) imported names; `*` for a wildcard import.
    pub names: Vec<String>,
}

/// Reads an `import_from_statement` or `future_import_statement`.
#[must_use]
pub fn import_from(tree: &SourceTree, node: Node<'_>) -> Option<ImportFrom> {
    let module = match node.kind() {
        "future_import_statement" => Some("__future__".to_string()),
        "import_from_statement" => {
            let module = node.child_by_field_name("module_name")?;
            match module.kind() {
                "dotted_name" => Some(dotted_name(tree, module)),
                "relative_import" => significant_children(module)
                    .into_iter()
                    .find(|n| n.kind() == "dotted_name")
                    .map(|n| dotted_name(tree, n)),
                _ => None,
            }
        }
        _ => return None,
    };

    let mut names = alias_names(tree, node);
    if significant_children(node)
        .iter()
        .any(|n| n.kind() == "wildcard_import")
    {
        names.push("*".to_string());
    }

    Some(ImportFrom { module, names })
}

/// Dotted module paths of an `import a.b, c as d` statement.
#[must_use]
pub fn import_names(tree: &SourceTree, node: Node<'_>) -> Vec<String> {
    if node.kind() == "import_statement" {
        alias_names(tree, node)
    } else {
        Vec::new()
    }
}

fn alias_names(tree: &SourceTree, node: Node<'_>) -> Vec<String> {
    let mut cursor = node.walk();
    let names: Vec<Node<'_>> = node.children_by_field_name("name", &mut cursor).collect();
    names
        .into_iter()
        .filter_map(|name| match name.kind() {
            "dotted_name" => Some(dotted_name(tree, name)),
            "aliased_import" => name
                .child_by_field_name("name")
                .map(|inner| dotted_name(tree, inner)),
            _ => None,
        })
        .collect()
}

/// Joins the identifiers of a `dotted_name`, ignoring any inner whitespace.
#[must_use]
pub fn dotted_name(tree: &SourceTree, node: Node<'_>) -> String {
    named_children(node)
        .into_iter()
        .filter(|n| n.kind() == "identifier")
        .map(|n| tree.text(n))
        .collect::<Vec<_>>()
        .join(".")
}

/// A positional parameter of a function definition.
#[derive(Debug, Clone)]
pub struct Param<'t, 's> {
    /// Parameter name.
    pub name: &'s str,
    /// Annotation expression, if any.
    pub annotation: Option<Node<'t>>,
    /// Text of a trailing `# type: ...` comment, if any.
    pub type_comment: Option<&'s str>,
}

/// Positional-or-keyword parameters of a `function_definition`.
///
/// Positional-only parameters before `/` and everything from `*`, `*args`
/// or `**kwargs` on are excluded.
#[must_use]
pub fn positional_params<'t, 's>(tree: &'s SourceTree, function: Node<'t>) -> Vec<Param<'t, 's>> {
    let Some(parameters) = function.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut params: Vec<Param<'t, 's>> = Vec::new();
    for child in named_children(parameters) {
        match child.kind() {
            "identifier" => params.push(Param {
                name: tree.text(child),
                annotation: None,
                type_comment: None,
            }),
            "typed_parameter" => {
                let Some(target) = significant_children(child).into_iter().next() else {
                    continue;
                };
                if target.kind() != "identifier" {
                    break;
                }
                params.push(Param {
                    name: tree.text(target),
                    annotation: annotation(child),
                    type_comment: None,
                });
            }
            "default_parameter" | "typed_default_parameter" => {
                let Some(name) = child.child_by_field_name("name") else {
                    continue;
                };
                params.push(Param {
                    name: tree.text(name),
                    annotation: annotation(child),
                    type_comment: None,
                });
            }
            "positional_separator" => params.clear(),
            "keyword_separator" | "list_splat_pattern" | "dictionary_splat_pattern" => break,
            "comment" => {
                let comment = type_comment(tree.text(child));
                if let (Some(last), Some(ty)) = (params.last_mut(), comment) {
                    last.type_comment = Some(ty);
                }
            }
            _ => {}
        }
    }
    params
}

fn annotation(param: Node<'_>) -> Option<Node<'_>> {
    let ty = param.child_by_field_name("type")?;
    significant_children(ty).into_iter().next().map(unparen)
}

fn type_comment(comment: &str) -> Option<&str> {
    let body = comment.strip_prefix('#')?.trim_start();
    body.strip_prefix("type:").map(str::trim)
}
