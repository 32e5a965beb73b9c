use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

const FLAG_BITS: [(u32, &str); 10] = [
    (0x1, "OPTIMIZED"),
    (0x2, "NEWLOCALS"),
    (0x4, "VARARGS"),
    (0x8, "VARKEYWORDS"),
    (0x10, "NESTED"),
    (0x20, "GENERATOR"),
    (0x40, "NOFREE"),
    (0x80, "COROUTINE"),
    (0x100, "ITERABLE_COROUTINE"),
    (0x200, "ASYNC_GENERATOR"),
];

pub fn decode_flags(bits: u32) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = bits;
    for (bit, name) in FLAG_BITS {
        if rest & bit != 0 {
            names.push(name.to_string());
            rest &= !bit;
        }
    }
    if rest != 0 {
        names.push(format!("{rest:#x}"));
    }
    names
}

pub fn packed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let bits = u32::deserialize(deserializer)?;
    Ok(decode_flags(bits))
}

pub fn default_descriptions() -> IndexMap<&'static str, &'static str> {
    IndexMap::from([
        (
            "OPTIMIZED",
            "The code unit is optimized, using fast locals.",
        ),
        (
            "NEWLOCALS",
            "A new locals mapping is created for the frame when the code unit is executed.",
        ),
        (
            "VARARGS",
            "The code unit has a variable positional parameter (*args-like).",
        ),
        (
            "VARKEYWORDS",
            "The code unit has a variable keyword parameter (**kwargs-like).",
        ),
        ("NESTED", "The code unit is a nested function."),
        (
            "GENERATOR",
            "The code unit is a generator function; executing it returns a generator object.",
        ),
        ("NOFREE", "There are no free or cell variables."),
        (
            "COROUTINE",
            "The code unit is a coroutine function; executing it returns a coroutine object.",
        ),
        (
            "ITERABLE_COROUTINE",
            "The generator is usable as a generator-based coroutine in await expressions.",
        ),
        (
            "ASYNC_GENERATOR",
            "The code unit is an asynchronous generator function.",
        ),
    ])
}

pub fn annotate<'a>(
    flags: &'a [String],
    descriptions: &IndexMap<&'a str, &'a str>,
) -> Vec<(&'a str, Option<&'a str>)> {
    flags
        .iter()
        .map(|flag| (flag.as_str(), descriptions.get(flag.as_str()).copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_known_bits() {
        assert_eq!(decode_flags(0x23), vec!["OPTIMIZED", "NEWLOCALS", "GENERATOR"]);
    }

    #[test]
    fn decode_empty() {
        assert!(decode_flags(0).is_empty());
    }

    #[test]
    fn decode_keeps_unknown_bits() {
        assert_eq!(decode_flags(0x401), vec!["OPTIMIZED", "0x400"]);
    }

    #[test]
    fn annotate_mixed() {
        let descriptions = default_descriptions();
        let flags = vec!["GENERATOR".to_string(), "UNKNOWN_FLAG".to_string()];
        let annotated = annotate(&flags, &descriptions);
        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[0].0, "GENERATOR");
        assert!(annotated[0].1.is_some());
        assert_eq!(annotated[1], ("UNKNOWN_FLAG", None));
    }

    #[test]
    fn annotate_preserves_order() {
        let descriptions = default_descriptions();
        let flags = vec!["NOFREE".to_string(), "OPTIMIZED".to_string()];
        let names: Vec<_> = annotate(&flags, &descriptions)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["NOFREE", "OPTIMIZED"]);
    }
}
