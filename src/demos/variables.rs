use crate::domain::models::{Section, Transcript};

const PI: f64 = 3.14159;
const GREETING: &str = "Hello, Rust learner!";

/// Assembles the full walkthrough in its fixed order.
pub fn transcript() -> Transcript {
    Transcript::new(
        "variables",
        vec![
            declarations(),
            primitives(),
            defaults(),
            constants(),
            multiple(),
            conversion(),
            shadowing(),
            summary(),
        ],
    )
}

/// Four ways to introduce a string binding.
fn declarations() -> Section {
    let name: String = String::from("Ada Lovelace");
    let name2 = "Grace Hopper".to_string();
    let name3 = "Margaret Hamilton";

    // Declare first, assign once later. The compiler tracks definite
    // initialization, so no `mut` is needed.
    let name4: &str;
    name4 = "Test";

    Section::new("declarations")
        .with("string one", name)
        .with("string two", name2)
        .with("string three", name3)
        .with("string four", name4)
}

/// Primitive values with explicit type annotations.
fn primitives() -> Section {
    let age: i32 = 40;
    let is_adult: bool = true;
    let per_sec_income: f32 = 1.334;

    Section::new("primitives")
        .with("int", age)
        .with("bool", is_adult)
        .with("float", per_sec_income)
}

/// The "zero value" concept: defaults are explicit here, via `Default`.
fn defaults() -> Section {
    Section::new("defaults")
        .with("default int", i32::default())
        .with("default bool", bool::default())
        .with("default string", format!("{:?}", String::default()))
        .with("default float", f64::default())
}

/// Constants are evaluated at compile time and cannot be reassigned.
fn constants() -> Section {
    Section::new("constants")
        .with("pi", PI)
        .with("greeting", GREETING)
}

/// Several bindings at once, by destructuring a tuple.
fn multiple() -> Section {
    let (x, y, z) = (10, 20, 30);
    let (a, b, c) = ("Apple", "Banana", "Cherry");

    Section::new("multiple")
        .with("ints", format!("{x} {y} {z}"))
        .with("strings", format!("{a} {b} {c}"))
}

/// Numeric conversion and number-to-string formatting, both explicit.
fn conversion() -> Section {
    let small: i32 = 10;
    let big = f64::from(small) * 1.5;

    let per_sec_income: f32 = 1.334;
    let income = format!("{per_sec_income:.2}");

    Section::new("conversion")
        .with("int to float", big)
        .with("formatted income", income)
}

/// A nested `let` hides the outer binding; the outer value survives.
fn shadowing() -> Section {
    let number = 5;
    let mut section = Section::new("shadowing").with("outer number", number);
    {
        let number = 10;
        section = section.with("inner number", number);
    }
    section.with("outer again", number)
}

fn summary() -> Section {
    Section::new("summary")
        .with("let", "use let for bindings and const for compile-time constants")
        .with("inference", "annotations are optional when the type is clear")
        .with("defaults", "missing values are explicit, via Default or Option")
        .with("conversion", "numeric conversions are explicit, via as or From")
        .with(
            "shadowing",
            "a nested let hides the outer binding until the block ends",
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(section: &Section) -> Vec<&str> {
        section.lines.iter().map(|l| l.value.as_str()).collect()
    }

    #[test]
    fn section_order_is_fixed() {
        let titles: Vec<String> = transcript()
            .sections
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(
            titles,
            [
                "declarations",
                "primitives",
                "defaults",
                "constants",
                "multiple",
                "conversion",
                "shadowing",
                "summary"
            ]
        );
    }

    #[test]
    fn shadowing_restores_outer_binding() {
        assert_eq!(values(&shadowing()), ["5", "10", "5"]);
    }

    #[test]
    fn defaults_match_zero_values() {
        assert_eq!(values(&defaults()), ["0", "false", "\"\"", "0"]);
    }

    #[test]
    fn conversion_is_explicit_and_rounds_down() {
        assert_eq!(values(&conversion()), ["15", "1.33"]);
    }

    #[test]
    fn deferred_initialization_still_prints_all_four_names() {
        let section = declarations();
        assert_eq!(section.lines.len(), 4);
        assert_eq!(section.lines[3].value, "Test");
    }
}
