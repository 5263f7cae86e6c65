use crate::{
    document::SchemaDocument,
    object::SchemaObject,
    property::SchemaProperty,
    types::{Literal, SchemaType},
};
use serde_json::json;

// ---- helpers -----------------------------------------------------------

fn string_property(name: &str) -> SchemaProperty {
    SchemaProperty::named(name, SchemaObject::of(SchemaType::String))
}

#[test]
fn scalar_fragment_renders_bson_type_alias() {
    let object = SchemaObject::of(SchemaType::Int64);

    assert_eq!(object.to_json(), json!({ "bsonType": "long" }));
}

#[test]
fn multi_type_fragment_renders_alias_array() {
    let mut object = SchemaObject::of(SchemaType::String);
    object.types.push(SchemaType::Null);

    assert_eq!(object.to_json(), json!({ "bsonType": ["string", "null"] }));
}

#[test]
fn enum_fragment_renders_permitted_values() {
    let object = SchemaObject::of(SchemaType::String).with_possible_values([
        Literal::from("RED"),
        Literal::from("GREEN"),
        Literal::from("BLUE"),
    ]);

    assert_eq!(
        object.to_json(),
        json!({ "bsonType": "string", "enum": ["RED", "GREEN", "BLUE"] })
    );
}

#[test]
fn array_fragment_renders_item_type() {
    let object = SchemaObject::of(SchemaType::Array).with_items(SchemaType::Int32);

    assert_eq!(
        object.to_json(),
        json!({ "bsonType": "array", "items": { "bsonType": "int" } })
    );
}

#[test]
fn embedded_fragment_renders_nested_properties_and_required() {
    let object = SchemaObject::of(SchemaType::Object)
        .with_properties([
            string_property("street"),
            SchemaProperty::named("number", SchemaObject::of(SchemaType::Int32)),
        ])
        .with_required(["street".to_string()]);

    assert!(object.is_embedded());
    assert_eq!(
        object.to_json(),
        json!({
            "bsonType": "object",
            "required": ["street"],
            "properties": {
                "street": { "bsonType": "string" },
                "number": { "bsonType": "int" },
            },
        })
    );
}

#[test]
fn embedded_fragment_with_no_properties_still_renders_property_map() {
    let object = SchemaObject::of(SchemaType::Object).with_properties([]);

    assert_eq!(
        object.to_json(),
        json!({ "bsonType": "object", "properties": {} })
    );
}

#[test]
fn plain_fragment_is_not_embedded() {
    assert!(!SchemaObject::of(SchemaType::Object).is_embedded());
    assert!(!SchemaObject::untyped().is_embedded());
}

#[test]
fn document_renders_envelope_with_declared_order() {
    let document = SchemaDocument::builder()
        .property(string_property("zebra"))
        .property(string_property("aardvark"))
        .required("zebra")
        .build();

    let rendered = document.to_document();
    let properties = &rendered["$jsonSchema"]["properties"];
    let names: Vec<&String> = properties
        .as_object()
        .expect("properties must be an object")
        .keys()
        .collect();

    // declaration order, not alphabetical
    assert_eq!(names, ["zebra", "aardvark"]);
    assert_eq!(rendered["$jsonSchema"]["required"], json!(["zebra"]));
    assert_eq!(rendered["$jsonSchema"]["bsonType"], json!("object"));
}

#[test]
fn document_required_membership_is_presence_only() {
    let document = SchemaDocument::builder()
        .property(string_property("name"))
        .required("name")
        .required("name")
        .build();

    assert_eq!(document.required(), ["name".to_string()]);
    assert!(document.is_required("name"));
    assert!(!document.is_required("age"));
}

#[test]
fn empty_required_set_is_omitted_from_rendering() {
    let document = SchemaDocument::builder()
        .property(string_property("name"))
        .build();

    let rendered = document.to_document();
    assert!(rendered["$jsonSchema"].get("required").is_none());
}

#[test]
fn literal_infers_its_schema_type() {
    assert_eq!(Literal::from("x").schema_type(), SchemaType::String);
    assert_eq!(Literal::from(7i64).schema_type(), SchemaType::Int64);
    assert_eq!(Literal::from(true).schema_type(), SchemaType::Bool);
    assert_eq!(Literal::Double(1.5).schema_type(), SchemaType::Double);
}

#[test]
fn schema_type_aliases_match_display() {
    for ty in [
        SchemaType::Array,
        SchemaType::Binary,
        SchemaType::ObjectId,
        SchemaType::Int32,
        SchemaType::Int64,
    ] {
        assert_eq!(ty.to_string(), ty.as_str());
    }
    assert_eq!(SchemaType::Binary.as_str(), "binData");
    assert_eq!(SchemaType::ObjectId.as_str(), "objectId");
}
