use crate::domain::models::{Section, Transcript};
use std::collections::HashMap;

const PI: f64 = 3.14159;

/// A record with named fields, used only to demonstrate struct syntax.
#[derive(Debug)]
struct User {
    name: String,
    age: u8,
}

/// A one-method behavior contract with a single concrete implementer.
trait Area {
    fn area(&self) -> f64;
}

struct Square {
    side: f64,
}

impl Area for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

/// Assembles the full walkthrough in its fixed order.
pub fn transcript() -> Transcript {
    Transcript::new(
        "datatypes",
        vec![
            integers(),
            floats(),
            booleans(),
            strings(),
            arrays(),
            vectors(),
            maps(),
            structs(),
            references(),
            functions(),
            contracts(),
            bytes_and_chars(),
            constants(),
            options(),
        ],
    )
}

fn integers() -> Section {
    let x: i32 = 42;
    let y: u32 = 100;
    Section::new("integers").with("x", x).with("y", y)
}

fn floats() -> Section {
    let pi: f32 = 3.14;
    let e: f64 = 2.71828;
    Section::new("floats").with("pi", pi).with("e", e)
}

fn booleans() -> Section {
    let is_active: bool = true;
    Section::new("booleans").with("is_active", is_active)
}

/// Strings are UTF-8; `len` counts bytes, not characters.
fn strings() -> Section {
    let name = "Rust";
    Section::new("strings")
        .with("name", name)
        .with("bytes", name.len())
}

/// Fixed-size sequence: the length is part of the type.
fn arrays() -> Section {
    let nums: [i32; 3] = [10, 20, 30];
    Section::new("arrays").with("nums", format!("{nums:?}"))
}

/// Growable sequence: push requires a `mut` binding.
fn vectors() -> Section {
    let mut fruits = vec!["apple", "banana"];
    fruits.push("cherry");
    Section::new("vectors").with("fruits", format!("{fruits:?}"))
}

/// Key-value mapping. Iteration order is unspecified, so only the
/// entry count and a keyed lookup are printed.
fn maps() -> Section {
    let mut ages = HashMap::new();
    ages.insert("Alice", 25);
    ages.insert("Bob", 30);

    Section::new("maps")
        .with("entries", ages.len())
        .with("alice", ages["Alice"])
}

/// Record construction, whole-value formatting, and field access.
fn structs() -> Section {
    let user = User {
        name: "Ada".to_string(),
        age: 36,
    };
    Section::new("structs")
        .with("user", format!("{user:?}"))
        .with("age field", user.age)
        .with("name field", user.name)
}

/// A shared borrow and the value read back through it. The address
/// itself is never printed; output must be identical across runs.
fn references() -> Section {
    let x = 10;
    let r = &x;
    Section::new("references")
        .with("x", x)
        .with("via reference", *r)
}

fn add(a: i32, b: i32) -> i32 {
    a + b
}

/// A named function assigned to a variable and called through it.
fn functions() -> Section {
    let f: fn(i32, i32) -> i32 = add;
    Section::new("functions").with("sum", f(3, 4))
}

/// Trait-object dispatch: any `Area` implementer fits behind the box.
fn contracts() -> Section {
    let shape: Box<dyn Area> = Box::new(Square { side: 4.0 });
    Section::new("contracts").with("square area", shape.area())
}

fn bytes_and_chars() -> Section {
    let b: u8 = b'A';
    let c: char = '好';
    Section::new("bytes and chars")
        .with("byte", b)
        .with("char", c)
        .with("scalar", c as u32)
}

fn constants() -> Section {
    Section::new("constants").with("pi", PI)
}

/// The absent value is a type, not a null pointer.
fn options() -> Section {
    let missing: Option<i32> = None;
    Section::new("options").with("missing", format!("{missing:?}"))
}
