//! The dynamically-typed element container.
//!
//! [`Element`] is a discriminated union over null, bool, int, double,
//! string, array, object, and function-callback payloads. Arrays and
//! objects share one ordered key-indexed child representation, which is
//! what makes index reads legal on objects and key scans legal on arrays.
//! Every element owns its subtree by value: copies are deep, no two
//! elements alias a child, and reference cycles cannot be formed.

use crate::children::{synthetic_key, Children};
use crate::error::{ElementError, Result};
use crate::types::Type;
use std::ops::Index;
use std::ptr;

/// Callback signature for function-valued elements.
///
/// A plain function pointer: copyable, comparable by identity, and unable
/// to capture mutable state. Equality of two function elements is identity
/// of the referenced callback, not behavioral equivalence.
pub type FunctionCallback = fn(&Element) -> Element;

/// Shared immutable Null element handed out by the read-only miss paths.
static NULL_ELEMENT: Element = Element {
    payload: Payload::Null,
    key: String::new(),
};

/// A dynamically-typed value: null, bool, int, double, string, array,
/// object, or function.
///
/// Scalar access comes in three flavors per kind: a strict getter with a
/// fixed fallback (`get_bool`), a caller-fallback getter (`get_bool_or`),
/// and a mutable-reference getter (`get_bool_mut`) that fails instead of
/// coercing. Setters always succeed and always retype.
///
/// ```rust
/// use dynel_core::{Element, Type};
///
/// let mut doc = Element::from(Type::Object);
/// doc.set("name", "dynel")?;
/// doc.set("retries", 3)?;
/// assert_eq!(doc.get_key("retries").i(), 3);
/// assert!(doc.get_key("missing").is_null());
/// # Ok::<(), dynel_core::ElementError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Element {
    payload: Payload,
    key: String,
}

#[derive(Debug, Clone)]
enum Payload {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Array(Children),
    Object(Children),
    Function(FunctionCallback),
}

impl PartialEq for Payload {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Payload::Null, Payload::Null) => true,
            (Payload::Bool(a), Payload::Bool(b)) => a == b,
            (Payload::Int(a), Payload::Int(b)) => a == b,
            (Payload::Double(a), Payload::Double(b)) => a == b,
            (Payload::String(a), Payload::String(b)) => a == b,
            (Payload::Array(a), Payload::Array(b)) => a == b,
            (Payload::Object(a), Payload::Object(b)) => a == b,
            (Payload::Function(a), Payload::Function(b)) => ptr::fn_addr_eq(*a, *b),
            _ => false,
        }
    }
}

impl Default for Element {
    /// Default construction yields Null.
    fn default() -> Self {
        Self {
            payload: Payload::Null,
            key: String::new(),
        }
    }
}

impl PartialEq for Element {
    /// Structural equality: discriminant and payload, children compared in
    /// order together with their keys. The provenance [`Element::key`]
    /// attribute is metadata and does not participate.
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload
    }
}

// ---------------------------------------------------------------------------
// Construction & typing
// ---------------------------------------------------------------------------

impl Element {
    /// A new Null element.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide shared immutable Null element used as the read-only
    /// fallback for missing indices and keys.
    pub fn null_element() -> &'static Element {
        &NULL_ELEMENT
    }

    fn from_payload(payload: Payload) -> Self {
        Self {
            payload,
            key: String::new(),
        }
    }

    /// Array element from a flat child list; children receive synthetic
    /// keys in order.
    pub fn array(values: Vec<Element>) -> Self {
        Self::from_payload(Payload::Array(Children::from_nodes(values)))
    }

    /// Object element from parallel key and value lists.
    ///
    /// Fails with `SizeMismatch` when the lists differ in length. The lists
    /// may carry duplicate keys; keyed reads then resolve to the last
    /// occurrence.
    pub fn object(keys: Vec<String>, values: Vec<Element>) -> Result<Self> {
        Ok(Self::from_payload(Payload::Object(Children::from_parts(
            keys, values,
        )?)))
    }

    /// Current type discriminant.
    pub fn get_type(&self) -> Type {
        match &self.payload {
            Payload::Null => Type::Null,
            Payload::Bool(_) => Type::Bool,
            Payload::Int(_) => Type::Int,
            Payload::Double(_) => Type::Double,
            Payload::String(_) => Type::String,
            Payload::Array(_) => Type::Array,
            Payload::Object(_) => Type::Object,
            Payload::Function(_) => Type::Function,
        }
    }

    /// Re-type to the zero value of `element_type`: false / 0 / 0.0 / "" /
    /// empty array / empty object. `Null` and `Function` both yield Null; a
    /// function element cannot exist without a callback.
    pub fn set_type(&mut self, element_type: Type) {
        match element_type {
            Type::Bool => self.set_bool(false),
            Type::Int => self.set_int(0),
            Type::Double => self.set_double(0.0),
            Type::String => self.set_string(""),
            Type::Array => self.payload = Payload::Array(Children::new()),
            Type::Object => self.payload = Payload::Object(Children::new()),
            Type::Null | Type::Function => self.set_as_null(true),
        }
    }

    /// Force the element to Null, dropping the previous payload.
    ///
    /// `_clear_existing_values` is kept for API completeness; payloads are
    /// owned by the active variant, so both flag values drop the old data
    /// and the two calls are observably identical.
    pub fn set_as_null(&mut self, _clear_existing_values: bool) {
        self.payload = Payload::Null;
    }

    /// Key under which this element was inserted into its parent; empty for
    /// roots and freshly constructed values. Stamped by the parent at
    /// insertion time, not derived from traversal.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }
}

// ---------------------------------------------------------------------------
// Scalar access
// ---------------------------------------------------------------------------

impl Element {
    /// Short alias for [`Element::get_bool`].
    pub fn b(&self) -> bool {
        self.get_bool()
    }

    /// The bool payload, or `false` when the element is not a bool.
    pub fn get_bool(&self) -> bool {
        self.get_bool_or(false)
    }

    /// The bool payload, or `fallback` when the element is not a bool.
    pub fn get_bool_or(&self, fallback: bool) -> bool {
        match self.payload {
            Payload::Bool(value) => value,
            _ => fallback,
        }
    }

    /// Mutable handle to the live bool payload. Fails with `TypeMismatch`
    /// instead of coercing; use [`Element::set_bool`] to retype.
    pub fn get_bool_mut(&mut self) -> Result<&mut bool> {
        match &mut self.payload {
            Payload::Bool(value) => Ok(value),
            _ => Err(ElementError::TypeMismatch {
                expected: Type::Bool,
            }),
        }
    }

    /// Overwrite the payload with `value` and retype to bool.
    pub fn set_bool(&mut self, value: bool) {
        self.payload = Payload::Bool(value);
    }

    /// Short alias for [`Element::get_int`].
    pub fn i(&self) -> i64 {
        self.get_int()
    }

    /// The int payload, or `0` when the element is not an int.
    pub fn get_int(&self) -> i64 {
        self.get_int_or(0)
    }

    /// The int payload, or `fallback` when the element is not an int.
    pub fn get_int_or(&self, fallback: i64) -> i64 {
        match self.payload {
            Payload::Int(value) => value,
            _ => fallback,
        }
    }

    /// Mutable handle to the live int payload, or `TypeMismatch`.
    pub fn get_int_mut(&mut self) -> Result<&mut i64> {
        match &mut self.payload {
            Payload::Int(value) => Ok(value),
            _ => Err(ElementError::TypeMismatch {
                expected: Type::Int,
            }),
        }
    }

    /// Overwrite the payload with `value` and retype to int.
    pub fn set_int(&mut self, value: i64) {
        self.payload = Payload::Int(value);
    }

    /// Short alias for [`Element::get_double`].
    pub fn d(&self) -> f64 {
        self.get_double()
    }

    /// The double payload, or `0.0` when the element is not a double.
    pub fn get_double(&self) -> f64 {
        self.get_double_or(0.0)
    }

    /// The double payload, or `fallback` when the element is not a double.
    pub fn get_double_or(&self, fallback: f64) -> f64 {
        match self.payload {
            Payload::Double(value) => value,
            _ => fallback,
        }
    }

    /// Mutable handle to the live double payload, or `TypeMismatch`.
    pub fn get_double_mut(&mut self) -> Result<&mut f64> {
        match &mut self.payload {
            Payload::Double(value) => Ok(value),
            _ => Err(ElementError::TypeMismatch {
                expected: Type::Double,
            }),
        }
    }

    /// Overwrite the payload with `value` and retype to double.
    pub fn set_double(&mut self, value: f64) {
        self.payload = Payload::Double(value);
    }

    /// Short alias for [`Element::get_string`].
    pub fn s(&self) -> &str {
        self.get_string()
    }

    /// The string payload, or `""` when the element is not a string.
    pub fn get_string(&self) -> &str {
        self.get_string_or("")
    }

    /// The string payload, or `fallback` when the element is not a string.
    pub fn get_string_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match &self.payload {
            Payload::String(value) => value,
            _ => fallback,
        }
    }

    /// Mutable handle to the live string payload, or `TypeMismatch`.
    pub fn get_string_mut(&mut self) -> Result<&mut String> {
        match &mut self.payload {
            Payload::String(value) => Ok(value),
            _ => Err(ElementError::TypeMismatch {
                expected: Type::String,
            }),
        }
    }

    /// Overwrite the payload with `value` and retype to string.
    pub fn set_string(&mut self, value: impl Into<String>) {
        self.payload = Payload::String(value.into());
    }
}

// ---------------------------------------------------------------------------
// Array protocol (index reads are shared with objects)
// ---------------------------------------------------------------------------

impl Element {
    fn children_storage(&self) -> Option<&Children> {
        match &self.payload {
            Payload::Array(children) | Payload::Object(children) => Some(children),
            _ => None,
        }
    }

    fn children_storage_mut(&mut self) -> Option<&mut Children> {
        match &mut self.payload {
            Payload::Array(children) | Payload::Object(children) => Some(children),
            _ => None,
        }
    }

    /// Child at `index`, or the shared Null element when the index is out
    /// of range or the element holds no children.
    pub fn get(&self, index: usize) -> &Element {
        self.get_or(index, Self::null_element())
    }

    /// Child at `index`, or `fallback`.
    pub fn get_or<'a>(&'a self, index: usize, fallback: &'a Element) -> &'a Element {
        self.children_storage()
            .and_then(|children| children.get(index))
            .unwrap_or(fallback)
    }

    /// Live mutable handle to the child at `index`, the only path for
    /// in-place mutation of an indexed child. Fails with `OutOfRange` when
    /// the element is not an array or object, or the index is beyond the
    /// current length.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Element> {
        let len = self.count_children();
        match self
            .children_storage_mut()
            .and_then(|children| children.get_mut(index))
        {
            Some(child) => Ok(child),
            None => Err(ElementError::OutOfRange { index, len }),
        }
    }

    /// Replace the payload with an array built from `values`, assigning
    /// synthetic keys in order.
    pub fn set_array(&mut self, values: Vec<Element>) {
        self.payload = Payload::Array(Children::from_nodes(values));
    }

    /// Replace the payload with an object built from parallel key and value
    /// lists; fails with `SizeMismatch` (leaving the element unmodified)
    /// when the lists differ in length.
    pub fn set_object(&mut self, keys: Vec<String>, values: Vec<Element>) -> Result<()> {
        self.payload = Payload::Object(Children::from_parts(keys, values)?);
        Ok(())
    }

    /// Append `value` as a new child under a freshly synthesized key.
    ///
    /// Chainable: `arr.push_back("val1")?.push_back(42)?;`. Fails with
    /// `InvalidOperation` on scalar elements and with `KeyCollision` when
    /// the synthesized key already exists (keys are generated
    /// monotonically, so a collision indicates inconsistent storage).
    pub fn push_back(&mut self, value: impl Into<Element>) -> Result<&mut Self> {
        let element_type = self.get_type();
        let children = match self.children_storage_mut() {
            Some(children) => children,
            None => {
                return Err(ElementError::InvalidOperation(format!(
                    "cannot push_back into a {element_type} element; only arrays and objects hold children"
                )))
            }
        };
        let key = synthetic_key(children.len());
        if children.exists(&key)? {
            return Err(ElementError::KeyCollision { key });
        }
        children.push(key, value.into());
        Ok(self)
    }

    /// Remove the child and its key at `index`; fails with `OutOfRange`
    /// beyond the current bounds.
    ///
    /// With `update_string_indexes` set, synthetic keys at later positions
    /// are renumbered so array-style indices stay contiguous; string keys
    /// without the reserved prefix are untouched.
    pub fn remove_at(&mut self, index: usize, update_string_indexes: bool) -> Result<()> {
        let len = self.count_children();
        let children = match self.children_storage_mut() {
            Some(children) if index < len => children,
            _ => return Err(ElementError::OutOfRange { index, len }),
        };
        children.remove_at(index);
        if update_string_indexes {
            children.renumber_from(index);
        }
        Ok(())
    }

    /// Drop all children and keys. No effect on scalar elements.
    pub fn remove_all_children(&mut self) {
        if let Some(children) = self.children_storage_mut() {
            children.clear();
        }
    }

    /// Number of children; 0 for scalar elements.
    pub fn count_children(&self) -> usize {
        self.children_storage().map_or(0, Children::len)
    }

    /// Whether any children are present; false for scalar elements.
    pub fn has_children(&self) -> bool {
        self.count_children() > 0
    }

    /// Children in insertion order; empty for scalar elements.
    pub fn children(&self) -> &[Element] {
        self.children_storage()
            .map_or(&[], |children| children.nodes())
    }

    /// Child keys in insertion order (synthetic `~N` keys for arrays);
    /// empty for scalar elements.
    pub fn get_keys(&self) -> &[String] {
        self.children_storage()
            .map_or(&[], |children| children.keys())
    }

    /// Iterator over the children in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.children().iter()
    }

    /// Mutable iterator over the children in insertion order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Element> {
        match self.children_storage_mut() {
            Some(children) => children.nodes_mut().iter_mut(),
            None => Default::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Object protocol
// ---------------------------------------------------------------------------

impl Element {
    /// Child under `key`, or the shared Null element when the key is absent
    /// or the element is not an object.
    pub fn get_key(&self, key: &str) -> &Element {
        self.get_key_or(key, Self::null_element())
    }

    /// Child under `key`, or `fallback`.
    pub fn get_key_or<'a>(&'a self, key: &str, fallback: &'a Element) -> &'a Element {
        match &self.payload {
            Payload::Object(children) => children.get_by_key(key).unwrap_or(fallback),
            _ => fallback,
        }
    }

    /// Live mutable handle to the child under `key`, inserting a Null child
    /// first when the key is absent (auto-vivification), so chained
    /// mutation works without a separate existence check. Callers that must
    /// not mutate use [`Element::get_key`] instead. Fails with
    /// `InvalidOperation` on non-objects.
    pub fn get_key_mut(&mut self, key: &str) -> Result<&mut Element> {
        let element_type = self.get_type();
        match &mut self.payload {
            Payload::Object(children) => Ok(children.entry(key)),
            _ => Err(ElementError::InvalidOperation(format!(
                "cannot access a {element_type} element by key; only objects support keyed access"
            ))),
        }
    }

    /// Insert or replace the child under `key`; fails with
    /// `InvalidOperation` on non-objects. An existing entry is replaced at
    /// its position, preserving insertion order; the child's key attribute
    /// is stamped either way.
    pub fn set(&mut self, key: &str, value: impl Into<Element>) -> Result<()> {
        let element_type = self.get_type();
        match &mut self.payload {
            Payload::Object(children) => {
                children.set(key, value.into());
                Ok(())
            }
            _ => Err(ElementError::InvalidOperation(format!(
                "cannot set key \"{key}\" on a {element_type} element; only objects hold keyed children"
            ))),
        }
    }

    /// Remove the entry under `key` (no-op when absent); fails with
    /// `InvalidOperation` on non-objects. Synthetic keys at later positions
    /// are renumbered when `update_string_indexes` is set, exactly as in
    /// [`Element::remove_at`].
    pub fn remove(&mut self, key: &str, update_string_indexes: bool) -> Result<()> {
        let element_type = self.get_type();
        let children = match &mut self.payload {
            Payload::Object(children) => children,
            _ => {
                return Err(ElementError::InvalidOperation(format!(
                    "cannot remove key \"{key}\" from a {element_type} element"
                )))
            }
        };
        if let Some(position) = children.find(key) {
            children.remove_at(position);
            if update_string_indexes {
                children.renumber_from(position);
            }
        }
        Ok(())
    }

    /// Whether a live entry with `key` is present. Fails fast with
    /// `CorruptState` if the key and child sequences have diverged.
    pub fn exists(&self, key: &str) -> Result<bool> {
        self.children_storage()
            .map_or(Ok(false), |children| children.exists(key))
    }

    /// Position of the last entry with `key`, scanning from the end (the
    /// duplicate-resolution rule applied by every keyed read). `None` when
    /// absent.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.children_storage()
            .and_then(|children| children.find(key))
    }
}

// ---------------------------------------------------------------------------
// Type predicates
// ---------------------------------------------------------------------------

impl Element {
    pub fn is(&self, element_type: Type) -> bool {
        self.get_type() == element_type
    }

    pub fn is_null(&self) -> bool {
        self.is(Type::Null)
    }

    pub fn is_bool(&self) -> bool {
        self.is(Type::Bool)
    }

    pub fn is_int(&self) -> bool {
        self.is(Type::Int)
    }

    pub fn is_double(&self) -> bool {
        self.is(Type::Double)
    }

    pub fn is_string(&self) -> bool {
        self.is(Type::String)
    }

    pub fn is_array(&self) -> bool {
        self.is(Type::Array)
    }

    pub fn is_object(&self) -> bool {
        self.is(Type::Object)
    }

    pub fn is_function(&self) -> bool {
        self.is(Type::Function)
    }

    /// Predicate applied to the child at `index`; a missing index tests as
    /// Null.
    pub fn is_at(&self, index: usize, element_type: Type) -> bool {
        self.get(index).is(element_type)
    }

    pub fn is_null_at(&self, index: usize) -> bool {
        self.is_at(index, Type::Null)
    }

    pub fn is_bool_at(&self, index: usize) -> bool {
        self.is_at(index, Type::Bool)
    }

    pub fn is_int_at(&self, index: usize) -> bool {
        self.is_at(index, Type::Int)
    }

    pub fn is_double_at(&self, index: usize) -> bool {
        self.is_at(index, Type::Double)
    }

    pub fn is_string_at(&self, index: usize) -> bool {
        self.is_at(index, Type::String)
    }

    pub fn is_array_at(&self, index: usize) -> bool {
        self.is_at(index, Type::Array)
    }

    pub fn is_object_at(&self, index: usize) -> bool {
        self.is_at(index, Type::Object)
    }

    pub fn is_function_at(&self, index: usize) -> bool {
        self.is_at(index, Type::Function)
    }

    /// Predicate applied to the child under `key`; a missing key tests as
    /// Null.
    pub fn is_key(&self, key: &str, element_type: Type) -> bool {
        self.get_key(key).is(element_type)
    }

    pub fn is_null_key(&self, key: &str) -> bool {
        self.is_key(key, Type::Null)
    }

    pub fn is_bool_key(&self, key: &str) -> bool {
        self.is_key(key, Type::Bool)
    }

    pub fn is_int_key(&self, key: &str) -> bool {
        self.is_key(key, Type::Int)
    }

    pub fn is_double_key(&self, key: &str) -> bool {
        self.is_key(key, Type::Double)
    }

    pub fn is_string_key(&self, key: &str) -> bool {
        self.is_key(key, Type::String)
    }

    pub fn is_array_key(&self, key: &str) -> bool {
        self.is_key(key, Type::Array)
    }

    pub fn is_object_key(&self, key: &str) -> bool {
        self.is_key(key, Type::Object)
    }

    pub fn is_function_key(&self, key: &str) -> bool {
        self.is_key(key, Type::Function)
    }
}

// ---------------------------------------------------------------------------
// Structural merge & function values
// ---------------------------------------------------------------------------

impl Element {
    /// Merge `new_element` into this element.
    ///
    /// Scalars, functions, and arrays overwrite wholesale; an incoming Null
    /// resets this element. Objects merge recursively key by key when this
    /// element is already an object (existing keys `apply` recursively, new
    /// keys are inserted), and convert wholesale otherwise. Arrays have no
    /// natural merge key, objects do; hence the asymmetry.
    pub fn apply(&mut self, new_element: &Element) {
        match &new_element.payload {
            Payload::Null => self.set_as_null(true),
            Payload::Bool(value) => self.set_bool(*value),
            Payload::Int(value) => self.set_int(*value),
            Payload::Double(value) => self.set_double(*value),
            Payload::String(value) => self.set_string(value.clone()),
            Payload::Function(callback) => self.set_function(*callback),
            Payload::Array(children) => self.payload = Payload::Array(children.clone()),
            Payload::Object(incoming) => match &mut self.payload {
                Payload::Object(existing) => {
                    for key in incoming.keys() {
                        // Last-match lookup, as for every keyed read; each
                        // duplicate occurrence applies the winning value.
                        if let Some(source) = incoming.get_by_key(key) {
                            match existing.find(key) {
                                Some(position) => {
                                    if let Some(target) = existing.get_mut(position) {
                                        target.apply(source);
                                    }
                                }
                                None => existing.set(key, source.clone()),
                            }
                        }
                    }
                }
                _ => self.payload = Payload::Object(incoming.clone()),
            },
        }
    }

    /// Overwrite the payload with `callback` and retype to function.
    pub fn set_function(&mut self, callback: FunctionCallback) {
        self.payload = Payload::Function(callback);
    }

    /// The stored callback, when the element is a function.
    pub fn callback(&self) -> Option<FunctionCallback> {
        match self.payload {
            Payload::Function(callback) => Some(callback),
            _ => None,
        }
    }

    /// Invoke the stored callback with `value` and return its result.
    /// Non-function elements produce Null without invoking anything;
    /// speculative calls are defined behavior, not failures.
    pub fn execute_function(&self, value: &Element) -> Element {
        match self.payload {
            Payload::Function(callback) => callback(value),
            _ => Element::new(),
        }
    }

    /// Short alias for [`Element::execute_function`].
    pub fn e(&self, value: &Element) -> Element {
        self.execute_function(value)
    }
}

// ---------------------------------------------------------------------------
// Conversions & indexing sugar
// ---------------------------------------------------------------------------

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Self::from_payload(Payload::Bool(value))
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Self::from_payload(Payload::Int(value))
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Self::from_payload(Payload::Int(i64::from(value)))
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Self::from_payload(Payload::Double(value))
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self::from_payload(Payload::String(value.to_owned()))
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Self::from_payload(Payload::String(value))
    }
}

impl From<Vec<Element>> for Element {
    /// Array element with synthetic keys assigned in order.
    fn from(values: Vec<Element>) -> Self {
        Self::array(values)
    }
}

impl From<FunctionCallback> for Element {
    fn from(callback: FunctionCallback) -> Self {
        Self::from_payload(Payload::Function(callback))
    }
}

impl From<Type> for Element {
    /// The zero value of `element_type`; `Null` and `Function` yield Null.
    fn from(element_type: Type) -> Self {
        let mut element = Element::new();
        element.set_type(element_type);
        element
    }
}

impl Index<usize> for Element {
    type Output = Element;

    /// Non-panicking sugar over [`Element::get`]: a miss yields the shared
    /// Null element.
    fn index(&self, index: usize) -> &Element {
        self.get(index)
    }
}

impl Index<&str> for Element {
    type Output = Element;

    /// Non-panicking sugar over [`Element::get_key`]: a miss yields the
    /// shared Null element.
    fn index(&self, key: &str) -> &Element {
        self.get_key(key)
    }
}

impl<'a> IntoIterator for &'a Element {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
