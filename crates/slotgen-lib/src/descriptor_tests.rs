use crate::descriptor::{Descriptor, INTEGER_FORMAT, POINTER_FORMAT, format_tag, is_pointer};

#[test]
fn zero_args_degrade_to_empty_lists() {
    let d = Descriptor::new(0x18, "u32", "ClearAll", Vec::<String>::new());

    assert_eq!(d.arity(), 0);
    assert!(!d.has_args());
    assert_eq!(d.args_decl(), "");
    assert_eq!(d.call_args(), "");
    assert_eq!(d.args_fmt(), "");
    assert_eq!(d.trace_separator(), "");
}

#[test]
fn two_integer_args() {
    let d = Descriptor::new(0x14, "u32", "Clear", ["u32", "u32"]);

    insta::assert_snapshot!(d.args_decl(), @"u32 a0, u32 a1");
    insta::assert_snapshot!(d.call_args(), @"a0, a1");
    insta::assert_snapshot!(d.args_fmt(), @"0x%x, 0x%x");
    assert_eq!(d.trace_separator(), ", ");
}

#[test]
fn pointer_args_use_pointer_tag() {
    let d = Descriptor::new(0x84, "void", "GfxFn_84", ["u32", "FF7::GameContext*"]);

    insta::assert_snapshot!(d.args_decl(), @"u32 a0, FF7::GameContext* a1");
    insta::assert_snapshot!(d.args_fmt(), @"0x%x, %p");
}

#[test]
fn canonical_names_are_shared() {
    let d = Descriptor::new(0x54, "u32", "GfxFn_54", ["u32"; 5]);
    let names: Vec<String> = d.arg_names().collect();

    assert_eq!(names, ["a0", "a1", "a2", "a3", "a4"]);
    for name in &names {
        assert!(d.args_decl().contains(&format!("u32 {name}")));
        assert!(d.call_args().contains(name.as_str()));
    }
}

#[test]
fn void_detection() {
    assert!(Descriptor::new(0, "void", "A", ["u32"]).is_void());
    assert!(Descriptor::new(0, " void ", "A", ["u32"]).is_void());
    assert!(!Descriptor::new(0, "void*", "A", ["u32"]).is_void());
    assert!(!Descriptor::new(0, "u32", "A", ["u32"]).is_void());
}

#[test]
fn pointer_detection() {
    assert!(is_pointer("void*"));
    assert!(is_pointer("FF7::GameContext* "));
    assert!(is_pointer("char**"));
    assert!(!is_pointer("u32"));
    assert!(!is_pointer(""));
    assert_eq!(format_tag("void*"), POINTER_FORMAT);
    assert_eq!(format_tag("u32"), INTEGER_FORMAT);
}

#[test]
fn serializes_inputs_only() {
    let d = Descriptor::new(0x14, "u32", "Clear", ["u32", "u32"]);
    let json = serde_json::to_string(&d).unwrap();

    assert_eq!(
        json,
        r#"{"offset":20,"return_type":"u32","name":"Clear","arg_types":["u32","u32"]}"#
    );
}
