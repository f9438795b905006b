use amython::{
    ast::Position,
    error::{ErrorKind, RuntimeError},
    interpreter::{
        evaluator::frame::{CallStack, Frame},
        value::core::{Numeric, Value},
    },
    util::snippet,
};
use pretty_assertions::assert_eq;

#[test]
fn global_frame_binds_builtins() {
    let stack = CallStack::new();

    for name in ["print", "min", "max", "abs", "sum"] {
        assert!(matches!(stack.lookup(name), Some(Value::Builtin(_))), "{name}");
    }
    assert_eq!(stack.depth(), 1);
}

#[test]
fn lookup_follows_parent_links_not_push_order() {
    let mut stack = CallStack::new();
    stack.bind("y", Value::Int(0));

    stack.push(Frame::new(1, Some(0)));
    stack.bind("y", Value::Int(1));

    stack.push(Frame::new(1, Some(0)));
    assert_eq!(stack.lookup("y"), Some(&Value::Int(0)));
    assert_eq!(stack.find_binding_frame("y"), Some(0));

    stack.pop();
    assert_eq!(stack.lookup("y"), Some(&Value::Int(1)));
    assert_eq!(stack.find_binding_frame("y"), Some(1));
}

#[test]
fn lookup_stops_at_a_parent_outside_the_stack() {
    let mut stack = CallStack::new();
    stack.push(Frame::new(1, Some(99)));
    stack.bind("x", Value::Int(1));

    assert_eq!(stack.lookup("x"), Some(&Value::Int(1)));
    assert_eq!(stack.lookup("print"), None);
    assert_eq!(stack.find_binding_frame("print"), None);
}

#[test]
fn global_frame_is_never_popped() {
    let mut stack = CallStack::new();
    stack.pop();

    assert_eq!(stack.depth(), 1);
    assert!(stack.lookup("print").is_some());
}

#[test]
fn frame_display_lists_bindings() {
    let mut frame = Frame::new(2, Some(1));
    frame.bindings.insert("b".to_string(), Value::Bool(true));
    frame.bindings.insert("a".to_string(), Value::Int(3));

    assert_eq!(frame.to_string(), "level: 2\na : 3\nb : True");
}

#[test]
fn value_rendering() {
    let rendered = [Value::from(-4),
                    Value::from(3.0),
                    Value::Float(0.1),
                    Value::Float(f64::INFINITY),
                    Value::Float(f64::NAN),
                    Value::from(true),
                    Value::Bool(false),
                    Value::Program("demo".into())].iter()
                                                  .map(ToString::to_string)
                                                  .collect::<Vec<_>>();

    assert_eq!(rendered, vec!["-4", "3.0", "0.1", "inf", "NaN", "True", "False", "<program demo>"]);
}

#[test]
fn numeric_promotion() {
    assert_eq!(Value::Int(7).numeric(), Some(Numeric::Int(7)));
    assert_eq!(Value::Bool(false).numeric(), Some(Numeric::Int(0)));
    assert_eq!(Value::Program("demo".into()).numeric(), None);
    assert_eq!(Numeric::Int(2).as_f64(), 2.0);
}

#[test]
fn truthiness() {
    let at = Position::new(1, 1);

    assert!(Value::Int(-1).truthy(at).unwrap());
    assert!(!Value::Int(0).truthy(at).unwrap());
    assert!(!Value::Float(0.0).truthy(at).unwrap());
    assert!(Value::Bool(true).truthy(at).unwrap());

    let err = Value::Program("demo".into()).truthy(at).unwrap_err();
    assert!(matches!(err, RuntimeError::TypeMismatch { .. }));
    assert_eq!(err.kind(), ErrorKind::TypeError);
}

#[test]
fn snippet_points_at_the_column() {
    let source = "PROGRAM demo {\n\tx = y\n}";

    assert_eq!(snippet::render(source, Position::new(2, 6)),
               "Error occurred at line 2\n  \tx = y\n  \t    ^");
}

#[test]
fn snippet_past_the_end_has_only_the_header() {
    assert_eq!(snippet::render("PROGRAM demo {}", Position::new(5, 1)), "Error occurred at line 5");
}
