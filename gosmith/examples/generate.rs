//! Example generation run over a small cyclic design.
//!
//! Builds a two-type design in which accounts hold orders and orders point
//! back at their account, generates the Go declarations, and splices them
//! under a package header the way a surrounding pipeline would.
//!
//! Run with: `cargo run --example generate`

use gosmith::prelude::*;

fn field(obj: &mut Object, name: &str, ty: DataType) {
    obj.insert(name.to_string(), AttributeDefinition::new(ty));
}

fn build_design() -> Design {
    let mut account = Object::new();
    field(&mut account, "id", DataType::Primitive(Primitive::Integer));
    field(&mut account, "name", DataType::Primitive(Primitive::String));
    field(
        &mut account,
        "orders",
        DataType::array(AttributeDefinition::new(DataType::named("order"))),
    );
    let mut account_attr = AttributeDefinition::new(DataType::Object(account));
    account_attr.require("id");
    account_attr.require("name");

    let mut order = Object::new();
    field(&mut order, "id", DataType::Primitive(Primitive::Integer));
    field(&mut order, "total", DataType::Primitive(Primitive::Number));
    field(&mut order, "account", DataType::named("account"));
    let mut order_attr = AttributeDefinition::new(DataType::Object(order));
    order_attr.require("id");

    let mut design = Design::new("store".to_string());
    let mut account_def = NamedTypeDef::new("account".to_string(), account_attr);
    account_def.description = Some("A registered customer account".to_string());
    design.add_type(account_def);
    design.add_type(NamedTypeDef::media(
        "order".to_string(),
        order_attr,
        "application/vnd.order+json".to_string(),
    ));
    design
}

fn main() -> Result<(), CodegenError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let design = build_design();
    let declarations = Generator::new(&design).generate()?;

    // The assembly below is the external pipeline's job; the engine only
    // produces the fragments.
    println!("package {}\n", goify(&design.name, false));
    for decl in &declarations {
        if let Some(description) = &decl.description {
            println!("// {} {}", decl.name, description);
        }
        println!("type {} {}\n", decl.name, decl.source);
    }

    Ok(())
}
