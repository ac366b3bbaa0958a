use serde_json::Number;
use std::fmt;
use std::sync::Arc;

/// 未經型別處理的原始資料（解析 API 回應後的 JSON 樹）
pub type RawValue = serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Boolean,
    /// 不做任何轉換，原樣保留
    Raw,
}

impl ScalarKind {
    /// 解析 manifest 中的純量名稱，包含舊式別名
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(ScalarKind::String),
            "int" | "integer" => Some(ScalarKind::Integer),
            "double" | "float" => Some(ScalarKind::Float),
            "bool" | "boolean" => Some(ScalarKind::Boolean),
            "array" | "mixed" | "raw" => Some(ScalarKind::Raw),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Integer => "integer",
            ScalarKind::Float => "float",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Raw => "raw",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// manifest 中宣告的欄位型別
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredKind {
    Scalar(ScalarKind),
    Type(String),
    ListOf(Box<DeclaredKind>),
}

impl fmt::Display for DeclaredKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredKind::Scalar(kind) => write!(f, "{}", kind),
            DeclaredKind::Type(name) => f.write_str(name),
            DeclaredKind::ListOf(inner) => write!(f, "{}[]", inner),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub kind: DeclaredKind,
}

/// 單一型別的 manifest：物件欄位清單或列表元素型別，兩者互斥
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Manifest {
    Object(Vec<FieldDecl>),
    List(DeclaredKind),
}

/// 由 manifest 推導出的遞迴結構描述
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Scalar(ScalarKind),
    Object(ObjectSchema),
    List(ListSchema),
}

impl Schema {
    pub fn shape_name(&self) -> &'static str {
        match self {
            Schema::Scalar(_) => "scalar",
            Schema::Object(_) => "mapping",
            Schema::List(_) => "sequence",
        }
    }

    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match self {
            Schema::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListSchema> {
        match self {
            Schema::List(list) => Some(list),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    pub type_name: String,
    /// 依 manifest 宣告順序
    pub fields: Vec<(String, Arc<Schema>)>,
}

impl ObjectSchema {
    pub fn field(&self, name: &str) -> Option<&Arc<Schema>> {
        self.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, schema)| schema)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListSchema {
    /// 列表型別（例如 TeamBansList）才有名稱，行內 `X[]` 欄位為 None
    pub type_name: Option<String>,
    pub element: Arc<Schema>,
}

/// 實體化後的值
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Raw(RawValue),
    Object(DomainObject),
    List(DomainList),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Raw(RawValue::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Raw(raw) => raw.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            Value::Raw(raw) => raw.as_f64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            Value::Raw(raw) => raw.as_bool(),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&DomainObject> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&DomainList> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// 巢狀物件與列表的 region 標記
    pub fn region(&self) -> Option<&str> {
        match self {
            Value::Object(object) => Some(object.region()),
            Value::List(list) => Some(list.region()),
            _ => None,
        }
    }

    pub fn to_json(&self) -> RawValue {
        match self {
            Value::String(s) => RawValue::String(s.clone()),
            Value::Integer(i) => RawValue::Number(Number::from(*i)),
            Value::Float(f) => Number::from_f64(*f)
                .map(RawValue::Number)
                .unwrap_or(RawValue::Null),
            Value::Boolean(b) => RawValue::Bool(*b),
            Value::Raw(raw) => raw.clone(),
            Value::Object(object) => object.to_json(),
            Value::List(list) => list.to_json(),
        }
    }
}

/// 物件中單一鍵的內容：manifest 宣告的欄位，或未宣告、原樣保留的值
#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Field(Value),
    Extra(RawValue),
}

/// 帶 region 標記的領域物件
///
/// 宣告欄位與未宣告欄位共用同一個有序鍵列表，輸出時維持 payload 的鍵順序。
#[derive(Debug, Clone, PartialEq)]
pub struct DomainObject {
    type_name: String,
    region: String,
    entries: Vec<(String, Slot)>,
}

impl DomainObject {
    pub fn new(type_name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            region: region.into(),
            entries: Vec::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// 寫入宣告欄位；同名鍵原地取代，保留原本位置
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.put(name.into(), Slot::Field(value));
    }

    pub fn insert_extra(&mut self, name: impl Into<String>, value: RawValue) {
        self.put(name.into(), Slot::Extra(value));
    }

    fn put(&mut self, name: String, slot: Slot) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = slot,
            None => self.entries.push((name, slot)),
        }
    }

    fn slot(&self, name: &str) -> Option<&Slot> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, slot)| slot)
    }

    /// 取得宣告欄位
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self.slot(name) {
            Some(Slot::Field(value)) => Some(value),
            _ => None,
        }
    }

    /// 取得 manifest 未宣告、原樣保留的欄位
    pub fn extra(&self, name: &str) -> Option<&RawValue> {
        match self.slot(name) {
            Some(Slot::Extra(value)) => Some(value),
            _ => None,
        }
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.slot(name).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().filter_map(|(name, slot)| match slot {
            Slot::Field(value) => Some((name.as_str(), value)),
            Slot::Extra(_) => None,
        })
    }

    pub fn extras(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().filter_map(|(name, slot)| match slot {
            Slot::Extra(value) => Some((name.as_str(), value)),
            Slot::Field(_) => None,
        })
    }

    /// 所有鍵，依 payload 順序
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(Value::as_str)
            .or_else(|| self.extra(name).and_then(RawValue::as_str))
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name)
            .and_then(Value::as_i64)
            .or_else(|| self.extra(name).and_then(RawValue::as_i64))
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name)
            .and_then(Value::as_f64)
            .or_else(|| self.extra(name).and_then(RawValue::as_f64))
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name)
            .and_then(Value::as_bool)
            .or_else(|| self.extra(name).and_then(RawValue::as_bool))
    }

    pub fn get_object(&self, name: &str) -> Option<&DomainObject> {
        self.get(name).and_then(Value::as_object)
    }

    pub fn get_list(&self, name: &str) -> Option<&DomainList> {
        self.get(name).and_then(Value::as_list)
    }

    /// 依 payload 的鍵順序輸出，宣告欄位與未宣告欄位交錯保留
    pub fn to_json(&self) -> RawValue {
        let map = self
            .entries
            .iter()
            .map(|(name, slot)| {
                let value = match slot {
                    Slot::Field(value) => value.to_json(),
                    Slot::Extra(raw) => raw.clone(),
                };
                (name.clone(), value)
            })
            .collect();
        RawValue::Object(map)
    }
}

/// 列表元素的原始位置：陣列索引或物件鍵
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListKey {
    Index(usize),
    Key(String),
}

impl fmt::Display for ListKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKey::Index(index) => write!(f, "{}", index),
            ListKey::Key(key) => f.write_str(key),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DomainList {
    type_name: Option<String>,
    region: String,
    entries: Vec<(ListKey, Value)>,
}

impl DomainList {
    pub fn new(type_name: Option<String>, region: impl Into<String>) -> Self {
        Self {
            type_name,
            region: region.into(),
            entries: Vec::new(),
        }
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn push(&mut self, key: ListKey, value: Value) {
        self.entries.push((key, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 依位置取值（不論原始鍵為何）
    pub fn get(&self, position: usize) -> Option<&Value> {
        self.entries.get(position).map(|(_, value)| value)
    }

    /// 依原始物件鍵取值
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry_key, _)| matches!(entry_key, ListKey::Key(k) if k == key))
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ListKey, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// 全部為索引鍵時輸出陣列，否則輸出保留原始鍵的物件
    pub fn to_json(&self) -> RawValue {
        let indexed = self
            .entries
            .iter()
            .all(|(key, _)| matches!(key, ListKey::Index(_)));
        if indexed {
            RawValue::Array(self.values().map(Value::to_json).collect())
        } else {
            let map = self
                .entries
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_json()))
                .collect();
            RawValue::Object(map)
        }
    }
}
