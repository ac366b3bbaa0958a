use crate::core::coerce::{coerce, shape_of};
use crate::domain::model::{
    DomainList, DomainObject, ListKey, ListSchema, ObjectSchema, RawValue, Schema, Value,
};
use crate::utils::error::{QuestError, Result};

/// 依 Schema 走訪原始資料，產生帶 region 標記的領域物件樹
///
/// 任何節點失敗都會中止整個呼叫，不會回傳部分結果。
pub fn materialize(schema: &Schema, raw: &RawValue, region: &str) -> Result<Value> {
    materialize_at(schema, raw, region, "$")
}

fn materialize_at(schema: &Schema, raw: &RawValue, region: &str, path: &str) -> Result<Value> {
    match schema {
        Schema::Scalar(kind) => coerce(*kind, raw, path),
        Schema::Object(object) => materialize_object(object, raw, region, path).map(Value::Object),
        Schema::List(list) => materialize_list(list, raw, region, path).map(Value::List),
    }
}

fn materialize_object(
    schema: &ObjectSchema,
    raw: &RawValue,
    region: &str,
    path: &str,
) -> Result<DomainObject> {
    let map = match raw {
        RawValue::Object(map) => map,
        other => return Err(shape_mismatch(path, "mapping", other)),
    };

    let mut object = DomainObject::new(schema.type_name.clone(), region);
    for (key, value) in map {
        match schema.field(key) {
            Some(field_schema) => {
                let field_path = format!("{}.{}", path, key);
                let materialized = materialize_at(field_schema, value, region, &field_path)?;
                object.insert(key.clone(), materialized);
            }
            // 未宣告的欄位原樣保留
            None => object.insert_extra(key.clone(), value.clone()),
        }
    }
    Ok(object)
}

fn materialize_list(
    schema: &ListSchema,
    raw: &RawValue,
    region: &str,
    path: &str,
) -> Result<DomainList> {
    let mut list = DomainList::new(schema.type_name.clone(), region);
    match raw {
        RawValue::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", path, index);
                let value = materialize_at(&schema.element, item, region, &item_path)?;
                list.push(ListKey::Index(index), value);
            }
        }
        // 以物件表示的列表保留原始鍵
        RawValue::Object(map) => {
            for (key, item) in map {
                let item_path = format!("{}[\"{}\"]", path, key);
                let value = materialize_at(&schema.element, item, region, &item_path)?;
                list.push(ListKey::Key(key.clone()), value);
            }
        }
        other => return Err(shape_mismatch(path, "sequence", other)),
    }
    Ok(list)
}

fn shape_mismatch(path: &str, expected: &'static str, raw: &RawValue) -> QuestError {
    QuestError::ShapeMismatch {
        path: path.to_string(),
        expected,
        found: shape_of(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ScalarKind;
    use serde_json::json;
    use std::sync::Arc;

    fn scalar(kind: ScalarKind) -> Arc<Schema> {
        Arc::new(Schema::Scalar(kind))
    }

    fn ban_schema() -> Arc<Schema> {
        Arc::new(Schema::Object(ObjectSchema {
            type_name: "TeamBans".to_string(),
            fields: vec![("championId".to_string(), scalar(ScalarKind::Integer))],
        }))
    }

    fn team_schema() -> Schema {
        Schema::Object(ObjectSchema {
            type_name: "Team".to_string(),
            fields: vec![
                ("teamId".to_string(), scalar(ScalarKind::Integer)),
                (
                    "bans".to_string(),
                    Arc::new(Schema::List(ListSchema {
                        type_name: Some("TeamBansList".to_string()),
                        element: ban_schema(),
                    })),
                ),
            ],
        })
    }

    #[test]
    fn test_nested_object_and_list() {
        let raw = json!({"teamId": "100", "bans": [{"championId": 64}, {"championId": "12"}]});
        let value = materialize(&team_schema(), &raw, "euw1").unwrap();

        let team = value.as_object().unwrap();
        assert_eq!(team.type_name(), "Team");
        assert_eq!(team.get_i64("teamId"), Some(100));

        let bans = team.get_list("bans").unwrap();
        assert_eq!(bans.type_name(), Some("TeamBansList"));
        assert_eq!(bans.len(), 2);
        assert_eq!(bans.get(1).unwrap().as_object().unwrap().get_i64("championId"), Some(12));
        assert!(bans.values().all(|ban| ban.region() == Some("euw1")));
    }

    #[test]
    fn test_mapping_treated_as_keyed_list() {
        let schema = Schema::List(ListSchema {
            type_name: None,
            element: ban_schema(),
        });
        let raw = json!({"100": {"championId": 1}, "200": {"championId": 2}});
        let value = materialize(&schema, &raw, "kr").unwrap();

        let list = value.as_list().unwrap();
        let keys: Vec<String> = list.iter().map(|(key, _)| key.to_string()).collect();
        assert_eq!(keys, vec!["100", "200"]);
        assert_eq!(
            list.get_key("200").unwrap().as_object().unwrap().get_i64("championId"),
            Some(2)
        );
    }

    #[test]
    fn test_error_path_points_at_failing_node() {
        let raw = json!({"teamId": 100, "bans": [{"championId": 1}, {"championId": "Ahri"}]});
        match materialize(&team_schema(), &raw, "").unwrap_err() {
            QuestError::ScalarCoercionError { path, kind, .. } => {
                assert_eq!(path, "$.bans[1].championId");
                assert_eq!(kind, "integer");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_null_nested_object_is_shape_mismatch() {
        let raw = json!({"bans": null});
        match materialize(&team_schema(), &raw, "").unwrap_err() {
            QuestError::ShapeMismatch { path, expected, found } => {
                assert_eq!(path, "$.bans");
                assert_eq!(expected, "sequence");
                assert_eq!(found, "null");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_list_of_lists_recurses() {
        let schema = Schema::List(ListSchema {
            type_name: None,
            element: Arc::new(Schema::List(ListSchema {
                type_name: None,
                element: scalar(ScalarKind::Float),
            })),
        });
        let value = materialize(&schema, &json!([[1, "2.5"], []]), "na1").unwrap();
        let outer = value.as_list().unwrap();
        let first = outer.get(0).unwrap().as_list().unwrap();
        assert_eq!(first.get(1), Some(&Value::Float(2.5)));
        assert_eq!(first.region(), "na1");
        assert!(outer.get(1).unwrap().as_list().unwrap().is_empty());
    }
}
