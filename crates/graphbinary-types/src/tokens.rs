//! The fixed traversal-language token enums. Each carries its GraphBinary
//! canonical wire name directly on the variant; unlike the reference
//! implementation there is no reserved-word mangling step, since none of
//! these names collide with a Rust keyword.

macro_rules! token_enum {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($wire => Some(Self::$variant)),+,
                    _ => None,
                }
            }
        }
    };
}

token_enum!(Barrier {
    NormSack => "normSack",
});

token_enum!(Cardinality {
    List => "list",
    Set => "set",
    Single => "single",
});

token_enum!(Column {
    Keys => "keys",
    Values => "values",
});

token_enum!(Direction {
    Both => "BOTH",
    In => "IN",
    Out => "OUT",
});

token_enum!(Operator {
    Sum => "sum",
    Minus => "minus",
    Mult => "mult",
    Div => "div",
    Min => "min",
    Max => "max",
    And => "and",
    Or => "or",
    AddAll => "addAll",
    SumLong => "sumLong",
});

token_enum!(Order {
    Asc => "asc",
    Desc => "desc",
    Shuffle => "shuffle",
});

token_enum!(Pick {
    Any => "any",
    None => "none",
});

token_enum!(Pop {
    First => "first",
    Last => "last",
    All => "all",
    Mixed => "mixed",
});

token_enum!(Scope {
    Global => "global",
    Local => "local",
});

token_enum!(T {
    Id => "id",
    Key => "key",
    Label => "label",
    Value => "value",
});
