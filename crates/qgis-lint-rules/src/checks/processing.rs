//! Processing algorithms run from plugin code.

use super::Context;
use crate::code::Code;
use crate::collector::Diagnostic;
use crate::messages;
use crate::shape::{attribute, call_args, call_function, name_id};
use tree_sitter::Node;

/// QGS110: `processing.run(...)` unless `is_child_algorithm` is given and
/// is not the literal `False`.
pub fn processing_run(cx: &Context<'_>, call: Node<'_>) -> Option<Diagnostic> {
    let callee = attribute(cx.tree, call_function(call)?)?;
    if callee.attr != "run" || name_id(cx.tree, callee.object) != Some("processing") {
        return None;
    }

    let flagged = match call_args(cx.tree, call).keyword("is_child_algorithm") {
        None => true,
        Some(value) => value.kind() == "false",
    };
    flagged.then(|| Diagnostic::at(call, Code::Qgs110, messages::QGS110))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::{first, with_context};

    fn check(source: &str) -> Option<String> {
        with_context(source, |cx| {
            processing_run(cx, first(cx, "call")).map(|d| d.to_string())
        })
    }

    #[test]
    fn missing_or_false_flag() {
        let expected = "1:0 QGS110 Use is_child_algorithm=True when running other \
                        algorithms in the plugin";
        assert_eq!(check("processing.run('native:buffer', {})\n").as_deref(), Some(expected));
        assert_eq!(
            check("processing.run('native:buffer', {}, is_child_algorithm=False)\n").as_deref(),
            Some(expected)
        );
    }

    #[test]
    fn child_algorithm_flag_set() {
        assert!(check("processing.run('native:buffer', {}, is_child_algorithm=True)\n").is_none());
        assert!(check("processing.run('native:buffer', {}, is_child_algorithm=flag)\n").is_none());
    }

    #[test]
    fn other_callees() {
        assert!(check("processing.runAndLoadResults('native:buffer', {})\n").is_none());
        assert!(check("self.processing.run('native:buffer', {})\n").is_none());
        assert!(check("run('native:buffer', {})\n").is_none());
    }
}
