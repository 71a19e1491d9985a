//! Parent builders re-expand their children on every build.

use eyre::Result;
use sharpen_csharp::{
    AccessorBuilder, ClassBuilder, CompilationUnitBuilder, FieldBuilder, Member, MethodBuilder,
    NamespaceBuilder, PropertyBuilder, Render, RenderConfig,
};

#[test]
fn test_building_twice_is_stable() -> Result<()> {
    let field = FieldBuilder::new("int", "count")?.with_modifier("private")?;
    let class = ClassBuilder::new("Counter")?.with_field(&field);
    let namespace = NamespaceBuilder::file_scoped("Demo")?.with_class(&class);

    assert_eq!(namespace.build(), namespace.build());
    assert_eq!(namespace.render(), namespace.render());
    Ok(())
}

#[test]
fn test_child_changes_after_attach_reach_the_root() -> Result<()> {
    let method = MethodBuilder::new("int", "Next")?;
    let class = ClassBuilder::new("Counter")?.with_method(&method);
    let namespace = NamespaceBuilder::file_scoped("Demo")?.with_class(&class);
    let unit = CompilationUnitBuilder::new().with_namespace(&namespace);

    assert_eq!(
        unit.render(),
        "namespace Demo;\n\nclass Counter\n{\n    int Next() => throw new NotImplementedException();\n}"
    );

    method.with_modifier("public")?.with_body("return ++this.count;")?;
    class.with_field(&FieldBuilder::new("int", "count")?);

    assert_eq!(
        unit.render(),
        "namespace Demo;\n\nclass Counter\n{\n    int count;\n    public int Next()\n    {\n        return ++this.count;\n    }\n}"
    );
    Ok(())
}

#[test]
fn test_same_child_attached_twice() -> Result<()> {
    let field = FieldBuilder::new("int", "x")?;
    let first = ClassBuilder::new("A")?.with_field(&field);
    let second = ClassBuilder::new("B")?.with_field(&field);

    field.with_modifier("public")?;

    assert_eq!(first.render(), "class A\n{\n    public int x;\n}");
    assert_eq!(second.render(), "class B\n{\n    public int x;\n}");
    Ok(())
}

#[test]
fn test_members_grouped_regardless_of_call_order() -> Result<()> {
    let property = PropertyBuilder::new("string", "Name")?
        .with_modifier("public")?
        .with_accessor(&AccessorBuilder::getter());
    let first = FieldBuilder::new("int", "first")?;
    let second = FieldBuilder::new("int", "second")?;
    let method = MethodBuilder::new("void", "Run")?.with_modifier("public")?;

    let class = ClassBuilder::new("Job")?
        .with_property(&property)
        .with_field(&first)
        .with_method(&method)
        .with_field(&second);

    let kinds: Vec<_> = class
        .build()
        .members
        .iter()
        .map(|member| match member {
            Member::Constructor(_) => "constructor",
            Member::Field(_) => "field",
            Member::Property(_) => "property",
            Member::Method(_) => "method",
        })
        .collect();
    assert_eq!(kinds, vec!["field", "field", "property", "method"]);

    assert_eq!(
        class.render(),
        "class Job\n{\n    int first;\n    int second;\n    public string Name { get; }\n\n    public void Run() => throw new NotImplementedException();\n}"
    );
    Ok(())
}

#[test]
fn test_render_with_tabs_and_crlf() -> Result<()> {
    let config = RenderConfig::from_toml_str("indent = \"tab\"\nline_ending = \"crlf\"\n")?;
    let method = MethodBuilder::new("void", "Run")?.with_body("Step();")?;
    let class = ClassBuilder::new("Job")?.with_method(&method);

    assert_eq!(
        class.build().render_with(&config),
        "class Job\r\n{\r\n\tvoid Run()\r\n\t{\r\n\t\tStep();\r\n\t}\r\n}"
    );
    Ok(())
}

#[test]
fn test_node_tree_serializes() -> Result<()> {
    let getter = AccessorBuilder::getter().with_arrow_expression("1")?;
    let property = PropertyBuilder::new("int", "One")?.with_accessor(&getter);
    let class = ClassBuilder::new("Numbers")?.with_property(&property);
    let namespace = NamespaceBuilder::enclosed("Demo")?.with_class(&class);
    let unit = CompilationUnitBuilder::new()
        .with_using("System")?
        .with_namespace(&namespace);

    let json = serde_json::to_value(unit.build())?;

    assert_eq!(json["usings"][0], "System");
    assert_eq!(json["namespaces"][0]["layout"], "Enclosed");
    let class = &json["namespaces"][0]["types"][0];
    assert_eq!(class["kind"], "Class");
    assert_eq!(class["name"], "Numbers");
    let accessor = &class["members"][0]["Property"]["accessors"][0];
    assert_eq!(accessor["kind"], "Get");
    assert_eq!(accessor["body"]["Expression"], "1");
    Ok(())
}
