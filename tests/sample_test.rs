//! Integration tests for sample generation.

use json_schema_sampler::{
    sample, sample_value, sample_with_document, SampleError, SampleOptions, Sampler, SchemaGraph,
};
use serde_json::{json, Value};

fn run(schema: Value) -> Value {
    sample_value(&schema, &SampleOptions::default()).unwrap()
}

/// Sample `schema`, resolving refs against a separately imported `document`.
fn run_with_document(
    schema: Value,
    options: &SampleOptions,
    document: Value,
) -> Result<Value, SampleError> {
    let mut graph = SchemaGraph::new();
    let root = graph.import(&schema);
    let doc = graph.import(&document);
    sample_with_document(&graph, root, options, doc)
}

/// Check that a sample validates against its (tree-shaped) schema.
fn assert_conforms(schema: &Value, value: &Value) {
    let validator = jsonschema::validator_for(schema).unwrap();
    assert!(
        validator.is_valid(value),
        "sample {value} does not satisfy {schema}"
    );
}

// === Primitives ===

mod primitives {
    use super::*;

    #[test]
    fn string() {
        assert_eq!(run(json!({ "type": "string" })), json!("string"));
    }

    #[test]
    fn number() {
        assert_eq!(run(json!({ "type": "number" })), json!(0));
    }

    #[test]
    fn boolean() {
        assert_eq!(run(json!({ "type": "boolean" })), json!(true));
    }

    #[test]
    fn default_value() {
        assert_eq!(run(json!({ "type": "number", "default": 100 })), json!(100));
    }

    #[test]
    fn type_list_uses_first() {
        assert_eq!(run(json!({ "type": ["string", "number"] })), json!("string"));
    }

    #[test]
    fn null_type() {
        assert_eq!(run(json!({ "type": "null" })), Value::Null);
    }

    #[test]
    fn untyped_schema_is_null() {
        assert_eq!(run(json!({})), Value::Null);
        assert_eq!(run(json!({ "description": "anything" })), Value::Null);
    }

    #[test]
    fn empty_type_list_is_null() {
        assert_eq!(run(json!({ "type": [] })), Value::Null);
    }
}

// === Objects ===

mod objects {
    use super::*;

    #[test]
    fn without_properties() {
        assert_eq!(run(json!({ "type": "object" })), json!({}));
    }

    #[test]
    fn with_property() {
        let schema = json!({
            "type": "object",
            "properties": { "title": { "type": "string" } }
        });
        assert_eq!(run(schema), json!({ "title": "string" }));
    }

    #[test]
    fn with_default_property() {
        let schema = json!({
            "type": "object",
            "properties": { "title": { "type": "string", "default": "Example" } }
        });
        assert_eq!(run(schema), json!({ "title": "Example" }));
    }

    #[test]
    fn keeps_declaration_order() {
        let schema = json!({
            "type": "object",
            "properties": {
                "zeta": { "type": "string" },
                "alpha": { "type": "number", "default": 10 },
                "mid": { "type": "boolean" }
            }
        });
        let value = run(schema);
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn properties_and_additional_properties() {
        let schema = json!({
            "type": "object",
            "properties": { "test": { "type": "string" } },
            "additionalProperties": { "type": "number" }
        });
        assert_eq!(
            run(schema),
            json!({ "test": "string", "property1": 0, "property2": 0 })
        );
    }
}

// === allOf ===

mod all_of {
    use super::*;

    #[test]
    fn merges_branches() {
        let schema = json!({
            "allOf": [
                { "type": "object", "properties": { "title": { "type": "string" } } },
                { "type": "object", "properties": { "amount": { "type": "number", "default": 1 } } }
            ]
        });
        assert_eq!(run(schema), json!({ "title": "string", "amount": 1 }));
    }

    #[test]
    fn first_declared_type_wins_over_later_branches() {
        let schema = json!({
            "allOf": [
                { "type": "string" },
                { "type": "object", "properties": { "amount": { "type": "number", "default": 1 } } }
            ]
        });
        let options = SampleOptions::default().quiet(true);
        assert_eq!(sample_value(&schema, &options).unwrap(), json!("string"));
    }

    #[test]
    fn deep_array_items() {
        let schema = json!({
            "allOf": [
                {
                    "type": "object",
                    "properties": {
                        "arr": { "type": "array", "items": { "type": "object" } }
                    }
                },
                {
                    "type": "object",
                    "properties": {
                        "arr": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": { "name": { "type": "string" } }
                            }
                        }
                    }
                }
            ]
        });
        assert_eq!(run(schema), json!({ "arr": [{ "name": "string" }] }));
    }

    #[test]
    fn untyped_branch_keeps_own_type() {
        let schema = json!({ "type": "string", "allOf": [{ "description": "test" }] });
        assert_eq!(run(schema), json!("string"));
    }

    #[test]
    fn array_branch() {
        let schema = json!({
            "type": "array",
            "allOf": [{ "type": "array", "items": { "type": "string" } }]
        });
        assert_eq!(run(schema), json!(["string"]));
    }

    #[test]
    fn own_properties_without_type() {
        let schema = json!({
            "properties": { "title": { "type": "string" } },
            "allOf": [
                { "type": "object", "properties": { "amount": { "type": "number", "default": 1 } } }
            ]
        });
        assert_eq!(run(schema), json!({ "title": "string", "amount": 1 }));

        let schema = json!({
            "type": "object",
            "properties": { "title": { "type": "string" } },
            "allOf": [{ "properties": { "amount": { "type": "number", "default": 1 } } }]
        });
        assert_eq!(run(schema), json!({ "title": "string", "amount": 1 }));
    }

    #[test]
    fn deep_properties() {
        let schema = json!({
            "type": "object",
            "allOf": [
                {
                    "type": "object",
                    "properties": {
                        "parent": {
                            "type": "object",
                            "properties": { "child1": { "type": "string" } }
                        }
                    }
                },
                {
                    "type": "object",
                    "properties": {
                        "parent": {
                            "type": "object",
                            "properties": { "child2": { "type": "number" } }
                        }
                    }
                }
            ]
        });
        assert_eq!(
            run(schema),
            json!({ "parent": { "child1": "string", "child2": 0 } })
        );
    }

    #[test]
    fn required_union_with_skip_non_required() {
        let schema = json!({
            "type": "object",
            "required": ["a"],
            "properties": { "a": { "type": "string" }, "c": { "type": "string" } },
            "allOf": [{ "required": ["b"], "properties": { "b": { "type": "integer" } } }]
        });
        let options = SampleOptions::default().skip_non_required(true);
        assert_eq!(
            sample_value(&schema, &options).unwrap(),
            json!({ "a": "string", "b": 0 })
        );
    }
}

// === Examples and enums ===

mod literals {
    use super::*;

    #[test]
    fn example_verbatim() {
        let example = json!({ "test": "test", "properties": { "test": { "type": "string" } } });
        let schema = json!({ "type": "object", "example": example.clone() });
        assert_eq!(run(schema), example);
    }

    #[test]
    fn falsy_example() {
        assert_eq!(run(json!({ "type": "string", "example": false })), json!(false));
        assert_eq!(run(json!({ "type": "string", "example": 0 })), json!(0));
        assert_eq!(run(json!({ "type": "string", "example": null })), Value::Null);
    }

    #[test]
    fn first_enum_value() {
        assert_eq!(
            run(json!({ "type": "string", "enum": ["test1", "test2"] })),
            json!("test1")
        );
    }

    #[test]
    fn empty_enum_is_ignored() {
        assert_eq!(run(json!({ "type": "string", "enum": [] })), json!("string"));
    }

    #[test]
    fn example_skips_children() {
        // The broken ref below is never visited
        let schema = json!({
            "type": "object",
            "example": { "ok": true },
            "properties": { "bad": { "$ref": "#/nowhere" } }
        });
        assert_eq!(run(schema), json!({ "ok": true }));
    }
}

// === Type inference ===

mod detection {
    use super::*;

    #[test]
    fn types_from_keywords() {
        let schema = json!({
            "properties": {
                "a": { "minimum": 10 },
                "b": { "minLength": 1 }
            }
        });
        assert_eq!(run(schema), json!({ "a": 10, "b": "string" }));
    }

    #[test]
    fn array_from_items() {
        assert_eq!(run(json!({ "items": { "type": "boolean" } })), json!([true]));
    }
}

// === if / then / else, oneOf, anyOf ===

mod compound_keywords {
    use super::*;

    #[test]
    fn if_then_else() {
        let schema = json!({
            "type": "object",
            "if": { "properties": { "foo": { "type": "string", "format": "email" } } },
            "then": { "properties": { "bar": { "type": "string" } } },
            "else": { "properties": { "baz": { "type": "number" } } }
        });
        assert_eq!(
            run(schema),
            json!({ "foo": "user@example.com", "bar": "string" })
        );
    }

    #[test]
    fn one_of() {
        let schema = json!({ "oneOf": [{ "type": "string" }, { "type": "number" }] });
        assert_eq!(run(schema), json!("string"));
    }

    #[test]
    fn any_of() {
        let schema = json!({ "anyOf": [{ "type": "string" }, { "type": "number" }] });
        assert_eq!(run(schema), json!("string"));
    }

    #[test]
    fn one_of_preferred_over_any_of() {
        let schema = json!({
            "anyOf": [{ "type": "string" }],
            "oneOf": [{ "type": "number" }]
        });
        let options = SampleOptions::default().quiet(true);
        assert_eq!(sample_value(&schema, &options).unwrap(), json!(0));
    }

    #[test]
    fn one_of_merges_with_siblings() {
        let schema = json!({
            "type": "object",
            "properties": { "kind": { "type": "string" } },
            "oneOf": [
                { "properties": { "cat": { "type": "boolean" } } },
                { "properties": { "dog": { "type": "boolean" } } }
            ]
        });
        assert_eq!(run(schema), json!({ "kind": "string", "cat": true }));
    }
}

// === $ref ===

mod refs {
    use super::*;

    #[test]
    fn follows_ref() {
        let schema = json!({
            "properties": { "test": { "$ref": "#/defs/Schema" } },
            "defs": {
                "Schema": { "type": "object", "properties": { "a": { "type": "string" } } }
            }
        });
        assert_eq!(run(schema), json!({ "test": { "a": "string" } }));
    }

    #[test]
    fn circular_ref_truncates() {
        let document = json!({
            "defs": {
                "str": { "type": "string" },
                "Schema": {
                    "type": "object",
                    "properties": {
                        "a": { "$ref": "#/defs/str" },
                        "b": { "$ref": "#/defs/Schema" }
                    }
                }
            }
        });
        let value = run_with_document(
            json!({ "$ref": "#/defs/Schema" }),
            &SampleOptions::default(),
            document,
        );
        assert_eq!(value.unwrap(), json!({ "a": "string", "b": {} }));
    }

    #[test]
    fn several_circular_refs_in_properties() {
        let document = json!({
            "defs": {
                "Schema": {
                    "type": "object",
                    "properties": {
                        "a": { "$ref": "#/defs/Schema" },
                        "b": { "$ref": "#/defs/Schema" }
                    }
                }
            }
        });
        let value = run_with_document(
            json!({ "$ref": "#/defs/Schema" }),
            &SampleOptions::default(),
            document,
        );
        assert_eq!(value.unwrap(), json!({ "a": {}, "b": {} }));
    }

    #[test]
    fn mutual_refs_truncate() {
        let schema = json!({
            "$ref": "#/defs/A",
            "defs": {
                "A": { "type": "object", "properties": { "b": { "$ref": "#/defs/B" } } },
                "B": { "type": "object", "properties": { "a": { "$ref": "#/defs/A" } } }
            }
        });
        assert_eq!(run(schema), json!({ "b": { "a": {} } }));
    }

    #[test]
    fn missing_document_is_invalid_reference() {
        let result = sample_value(&json!({ "$ref": "#/defs/Schema" }), &SampleOptions::default());
        let err = result.unwrap_err();
        assert!(matches!(
            &err,
            SampleError::InvalidReference { token, .. } if token == "defs"
        ));
        assert!(err.to_string().contains("Invalid reference token: defs"));
    }

    #[test]
    fn invalid_reference_aborts_whole_call() {
        let schema = json!({
            "type": "object",
            "properties": {
                "fine": { "type": "string" },
                "deep": { "type": "object", "properties": { "bad": { "$ref": "#/defs/Gone" } } }
            },
            "defs": {}
        });
        assert!(matches!(
            sample_value(&schema, &SampleOptions::default()),
            Err(SampleError::InvalidReference { token, .. }) if token == "Gone"
        ));
    }

    #[test]
    fn skips_read_only_through_ref() {
        let schema = json!({
            "type": "object",
            "properties": {
                "a": { "allOf": [{ "$ref": "#/defs/Prop" }], "description": "prop A" },
                "b": { "type": "string" }
            }
        });
        let document = json!({
            "defs": { "Prop": { "type": "string", "readOnly": true } }
        });
        let options = SampleOptions::default().skip_read_only(true);
        assert_eq!(
            run_with_document(schema, &options, document).unwrap(),
            json!({ "b": "string" })
        );
    }
}

// === Object identity cycles ===

mod identity_cycles {
    use super::*;

    #[test]
    fn self_referential_graph_truncates() {
        let mut graph = SchemaGraph::new();
        let some_type = graph.import(&json!({ "type": "string" }));
        let circular = graph.import(&json!({ "type": "object", "properties": {} }));
        let props = graph.get(circular, "properties").unwrap();
        graph.set(props, "a", some_type).unwrap();
        graph.set(props, "b", circular).unwrap();

        let value = sample(&graph, circular, &SampleOptions::default()).unwrap();
        assert_eq!(value, json!({ "a": "string", "b": {} }));
    }

    #[test]
    fn several_self_references() {
        let mut graph = SchemaGraph::new();
        let circular = graph.import(&json!({ "type": "object", "properties": {} }));
        let props = graph.get(circular, "properties").unwrap();
        graph.set(props, "a", circular).unwrap();
        graph.set(props, "b", circular).unwrap();

        let value = sample(&graph, circular, &SampleOptions::default()).unwrap();
        assert_eq!(value, json!({ "a": {}, "b": {} }));
    }

    #[test]
    fn nested_self_reference_truncates_at_repeat() {
        let mut graph = SchemaGraph::new();
        let root = graph.import(&json!({ "type": "object", "properties": {} }));
        let inner = graph.import(&json!({ "type": "object", "properties": {} }));
        let root_props = graph.get(root, "properties").unwrap();
        let inner_props = graph.get(inner, "properties").unwrap();
        graph.set(root_props, "inner", inner).unwrap();
        graph.set(inner_props, "loop", inner).unwrap();
        graph.set(inner_props, "up", root).unwrap();

        let value = sample(&graph, root, &SampleOptions::default()).unwrap();
        assert_eq!(value, json!({ "inner": { "loop": {}, "up": {} } }));
    }

    #[test]
    fn shared_subschemas_are_not_circular() {
        let mut graph = SchemaGraph::new();
        let a = graph.import(&json!({ "type": "string", "example": "test" }));
        let b = graph.import(&json!({ "type": "integer", "example": 1 }));
        let c = graph.import(&json!({
            "type": "object",
            "properties": { "test": { "type": "string" } }
        }));
        let d = graph.import(&json!({ "type": "array", "items": { "type": "string" } }));

        let composed = |graph: &mut SchemaGraph, keyword: &str, branch| {
            let node = graph.add_object();
            let list = graph.add_array();
            graph.push(list, branch).unwrap();
            graph.push(list, branch).unwrap();
            graph.set(node, keyword, list).unwrap();
            node
        };
        let e = composed(&mut graph, "allOf", c);
        let f = composed(&mut graph, "oneOf", d);
        let g = composed(&mut graph, "anyOf", c);
        let h = graph.import(&json!({ "$ref": "#/a" }));

        let schema = graph.import(&json!({ "type": "object", "properties": {} }));
        let props = graph.get(schema, "properties").unwrap();
        for (name, node) in [
            ("a", a), ("aa", a), ("b", b), ("bb", b), ("c", c), ("cc", c),
            ("d", d), ("dd", d), ("e", e), ("ee", e), ("f", f), ("ff", f),
            ("g", g), ("gg", g), ("h", h), ("hh", h),
        ] {
            graph.set(props, name, node).unwrap();
        }

        let document = graph.add_object();
        graph.set(document, "nonCircularSchema", schema).unwrap();
        graph.set(document, "a", a).unwrap();

        let value =
            sample_with_document(&graph, schema, &SampleOptions::default(), document).unwrap();
        assert_eq!(
            value,
            json!({
                "a": "test", "aa": "test",
                "b": 1, "bb": 1,
                "c": { "test": "string" }, "cc": { "test": "string" },
                "d": ["string"], "dd": ["string"],
                "e": { "test": "string" }, "ee": { "test": "string" },
                "f": ["string"], "ff": ["string"],
                "g": { "test": "string" }, "gg": { "test": "string" },
                "h": "test", "hh": "test"
            })
        );
    }

    #[test]
    fn structurally_equal_nodes_are_distinct() {
        // Same shape imported twice: nesting one inside the other is not a cycle
        let mut graph = SchemaGraph::new();
        let outer = graph.import(&json!({ "type": "object", "properties": {} }));
        let inner = graph.import(&json!({ "type": "object", "properties": {} }));
        let leaf = graph.import(&json!({ "type": "boolean" }));
        let outer_props = graph.get(outer, "properties").unwrap();
        let inner_props = graph.get(inner, "properties").unwrap();
        graph.set(outer_props, "next", inner).unwrap();
        graph.set(inner_props, "leaf", leaf).unwrap();

        let value = sample(&graph, outer, &SampleOptions::default()).unwrap();
        assert_eq!(value, json!({ "next": { "leaf": true } }));
    }

    #[test]
    fn circular_all_of_branch() {
        let mut graph = SchemaGraph::new();
        let node = graph.import(&json!({
            "type": "object",
            "properties": { "x": { "type": "string" } }
        }));
        let list = graph.add_array();
        graph.push(list, node).unwrap();
        graph.set(node, "allOf", list).unwrap();

        let value = sample(&graph, node, &SampleOptions::default()).unwrap();
        assert_eq!(value, json!({ "x": "string" }));
    }
}

// === Budget and depth ===

mod limits {
    use super::*;

    fn nested() -> Value {
        json!({
            "type": "object",
            "properties": {
                "nestedObject": {
                    "type": "object",
                    "properties": { "title": { "type": "string" } }
                }
            }
        })
    }

    #[test]
    fn ticks_exhausted() {
        let options = SampleOptions::default().ticks(2);
        let err = sample_value(&nested(), &options).unwrap_err();
        assert_eq!(err, SampleError::SchemaSizeExceeded { ticks: 2 });
        assert!(err.to_string().contains("Schema size exceeded"));
    }

    #[test]
    fn exact_budget_is_enough() {
        let options = SampleOptions::default().ticks(3);
        assert_eq!(
            sample_value(&nested(), &options).unwrap(),
            json!({ "nestedObject": { "title": "string" } })
        );
    }

    #[test]
    fn combinatorial_all_of_is_bounded() {
        // Every level merges the next one twice, doubling the work per level
        let mut graph = SchemaGraph::new();
        let mut current = graph.import(&json!({ "type": "string" }));
        for _ in 0..40 {
            let node = graph.add_object();
            let list = graph.add_array();
            graph.push(list, current).unwrap();
            graph.push(list, current).unwrap();
            graph.set(node, "allOf", list).unwrap();
            current = node;
        }
        let err = sample(&graph, current, &SampleOptions::default()).unwrap_err();
        assert!(err.is_resource_limit());
    }

    #[test]
    fn depth_limit_truncates_recursion_without_error() {
        let mut graph = SchemaGraph::new();
        let mut current = graph.import(&json!({ "type": "string" }));
        for _ in 0..30 {
            let node = graph.import(&json!({ "type": "object", "properties": {} }));
            let props = graph.get(node, "properties").unwrap();
            graph.set(props, "child", current).unwrap();
            current = node;
        }
        let options = SampleOptions::default().max_sample_depth(2);
        let value = sample(&graph, current, &options).unwrap();
        assert_eq!(value, json!({ "child": { "child": { "child": {} } } }));
    }

    #[test]
    fn budget_resets_between_calls() {
        let options = SampleOptions::default().ticks(3);
        for _ in 0..3 {
            assert!(sample_value(&nested(), &options).is_ok());
        }
    }

    #[test]
    fn depth_truncated_items_spend_budget() {
        let schema = json!({
            "type": "array",
            "minItems": 5_000_000,
            "items": { "type": "object" }
        });
        let options = SampleOptions::default().ticks(10).max_sample_depth(0);
        assert_eq!(
            sample_value(&schema, &options).unwrap_err(),
            SampleError::SchemaSizeExceeded { ticks: 10 }
        );
    }

    #[test]
    fn circular_items_spend_budget() {
        let mut graph = SchemaGraph::new();
        let array = graph.import(&json!({ "type": "array", "minItems": 5_000_000 }));
        graph.set(array, "items", array).unwrap();

        let options = SampleOptions::default().ticks(10);
        let err = sample(&graph, array, &options).unwrap_err();
        assert!(err.is_resource_limit());
    }

    #[test]
    fn scalar_leaves_survive_depth_limit() {
        let schema = json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "tags": { "type": "array", "items": { "type": "string" } },
                "meta": { "type": "object", "properties": { "n": { "type": "integer" } } }
            }
        });
        let options = SampleOptions::default().max_sample_depth(0);
        assert_eq!(
            sample_value(&schema, &options).unwrap(),
            json!({ "name": "string", "tags": [], "meta": {} })
        );
    }
}

// === Custom samplers ===

mod registry {
    use super::*;

    #[test]
    fn override_builtin() {
        let mut sampler = Sampler::new();
        sampler
            .registry_mut()
            .register_fn("string", |schema, _traversal| {
                Ok(Value::from(schema.string("format").unwrap_or("custom")))
            });
        let (graph, root) = SchemaGraph::from_value(&json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "when": { "type": "string", "format": "date" }
            }
        }));
        let value = sampler.sample(&graph, root, &SampleOptions::default()).unwrap();
        assert_eq!(value, json!({ "name": "custom", "when": "date" }));
    }

    #[test]
    fn custom_composite_type_recurses() {
        let mut sampler = Sampler::new();
        sampler.registry_mut().register_fn("pair", |schema, traversal| {
            let mut out = Vec::new();
            if let Some(json_schema_sampler::Items::Single(item)) = &schema.items {
                for _ in 0..2 {
                    out.push(traversal.visit_child(item.clone())?.value);
                }
            }
            Ok(Value::Array(out))
        });
        let (graph, root) = SchemaGraph::from_value(&json!({
            "type": "pair",
            "items": { "type": "integer", "minimum": 7 }
        }));
        let value = sampler.sample(&graph, root, &SampleOptions::default()).unwrap();
        assert_eq!(value, json!([7, 7]));
    }

    #[test]
    fn default_sampler_unaffected() {
        let mut sampler = Sampler::new();
        sampler
            .registry_mut()
            .register_fn("boolean", |_schema, _traversal| Ok(Value::Bool(false)));
        assert_eq!(run(json!({ "type": "boolean" })), json!(true));
    }
}

// === Concurrency ===

mod concurrency {
    use super::*;
    use std::thread;

    #[test]
    fn independent_calls_on_threads() {
        let schema = json!({
            "$ref": "#/defs/Node",
            "defs": {
                "Node": {
                    "type": "object",
                    "properties": {
                        "value": { "type": "integer" },
                        "next": { "$ref": "#/defs/Node" }
                    }
                }
            }
        });
        let (graph, root) = SchemaGraph::from_value(&schema);
        let expected = json!({ "value": 0, "next": {} });

        thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| sample(&graph, root, &SampleOptions::default())))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().unwrap(), expected);
            }
        });
    }
}

// === Conformance ===

mod conformance {
    use super::*;

    #[test]
    fn samples_validate_against_schema() {
        let schemas = [
            json!({ "type": "string", "minLength": 10, "maxLength": 12 }),
            json!({ "type": "integer", "minimum": 3, "maximum": 9, "multipleOf": 2 }),
            json!({ "type": "number", "exclusiveMinimum": 0, "exclusiveMaximum": 1 }),
            json!({ "type": "array", "items": { "type": "string" }, "minItems": 2 }),
            json!({
                "type": "object",
                "required": ["id", "tags"],
                "properties": {
                    "id": { "type": "string", "format": "uuid" },
                    "tags": { "type": "array", "items": { "enum": ["a", "b"] } },
                    "meta": { "additionalProperties": { "type": "boolean" } }
                }
            }),
            json!({
                "allOf": [
                    {
                        "type": "object",
                        "properties": { "a": { "type": "string" } },
                        "required": ["a"]
                    },
                    { "properties": { "b": { "type": "number", "minimum": 1 } }, "required": ["b"] }
                ]
            }),
        ];
        for schema in &schemas {
            let value = sample_value(schema, &SampleOptions::default()).unwrap();
            assert_conforms(schema, &value);
        }
    }
}
