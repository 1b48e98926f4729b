//! Built-in class tables, palette, spacing scale and breakpoints.

use super::BaseClass;

pub const ASPECT_RATIO_ORDER: i32 = 100;
pub const COLUMNS_ORDER: i32 = 200;
pub const BREAK_BEFORE_ORDER: i32 = 300;
pub const BREAK_INSIDE_ORDER: i32 = 400;
pub const BREAK_AFTER_ORDER: i32 = 500;
pub const BOX_DECORATION_ORDER: i32 = 600;
pub const BOX_SIZING_ORDER: i32 = 700;
pub const DISPLAY_ORDER: i32 = 800;
pub const FLOAT_ORDER: i32 = 900;
pub const CLEAR_ORDER: i32 = 1000;
pub const ISOLATION_ORDER: i32 = 1100;
pub const FLEX_BASIS_ORDER: i32 = 1200;
pub const FLEX_DIRECTION_ORDER: i32 = 1300;
pub const FLEX_WRAP_ORDER: i32 = 1400;
pub const GROW_ORDER: i32 = 1500;
pub const BACKGROUND_COLOR_ORDER: i32 = 1600;
pub const TEXT_COLOR_ORDER: i32 = 1700;
pub const TEXT_WRAP_ORDER: i32 = 1800;
pub const ARBITRARY_PROPERTY_ORDER: i32 = 10000;

pub const DEFAULT_BREAKPOINTS: &[(&str, &str)] = &[
    ("sm", "640px"),
    ("md", "768px"),
    ("lg", "1024px"),
    ("xl", "1280px"),
    ("2xl", "1536px"),
];

/// Spacing steps; step `n` is `n / 4` rem.
pub const SPACING_STEPS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "14", "16", "20", "24",
    "28", "32", "36", "40", "44", "48", "52", "56", "60", "64", "72", "80", "96",
];

pub const FRACTIONS: &[&str] = &[
    "1/2", "1/3", "2/3", "1/4", "2/4", "3/4", "1/5", "2/5", "3/5", "4/5", "1/6", "2/6", "3/6",
    "4/6", "5/6", "1/12", "2/12", "3/12", "4/12", "5/12", "6/12", "7/12", "8/12", "9/12",
    "10/12", "11/12",
];

pub const DEFAULT_COLORS: &[(&str, &str)] = &[
    ("inherit", "inherit"),
    ("current", "currentColor"),
    ("transparent", "transparent"),
    ("black", "#000"),
    ("white", "#fff"),
    ("slate-50", "#f8fafc"),
    ("slate-100", "#f1f5f9"),
    ("slate-200", "#e2e8f0"),
    ("slate-300", "#cbd5e1"),
    ("slate-400", "#94a3b8"),
    ("slate-500", "#64748b"),
    ("slate-600", "#475569"),
    ("slate-700", "#334155"),
    ("slate-800", "#1e293b"),
    ("slate-900", "#0f172a"),
    ("slate-950", "#020617"),
    ("gray-50", "#f9fafb"),
    ("gray-100", "#f3f4f6"),
    ("gray-200", "#e5e7eb"),
    ("gray-300", "#d1d5db"),
    ("gray-400", "#9ca3af"),
    ("gray-500", "#6b7280"),
    ("gray-600", "#4b5563"),
    ("gray-700", "#374151"),
    ("gray-800", "#1f2937"),
    ("gray-900", "#111827"),
    ("gray-950", "#030712"),
    ("zinc-50", "#fafafa"),
    ("zinc-100", "#f4f4f5"),
    ("zinc-200", "#e4e4e7"),
    ("zinc-300", "#d4d4d8"),
    ("zinc-400", "#a1a1aa"),
    ("zinc-500", "#71717a"),
    ("zinc-600", "#52525b"),
    ("zinc-700", "#3f3f46"),
    ("zinc-800", "#27272a"),
    ("zinc-900", "#18181b"),
    ("zinc-950", "#09090b"),
    ("neutral-50", "#fafafa"),
    ("neutral-100", "#f5f5f5"),
    ("neutral-200", "#e5e5e5"),
    ("neutral-300", "#d4d4d4"),
    ("neutral-400", "#a3a3a3"),
    ("neutral-500", "#737373"),
    ("neutral-600", "#525252"),
    ("neutral-700", "#404040"),
    ("neutral-800", "#262626"),
    ("neutral-900", "#171717"),
    ("neutral-950", "#0a0a0a"),
    ("stone-50", "#fafaf9"),
    ("stone-100", "#f5f5f4"),
    ("stone-200", "#e7e5e4"),
    ("stone-300", "#d6d3d1"),
    ("stone-400", "#a8a29e"),
    ("stone-500", "#78716c"),
    ("stone-600", "#57534e"),
    ("stone-700", "#44403c"),
    ("stone-800", "#292524"),
    ("stone-900", "#1c1917"),
    ("stone-950", "#0c0a09"),
    ("red-50", "#fef2f2"),
    ("red-100", "#fee2e2"),
    ("red-200", "#fecaca"),
    ("red-300", "#fca5a5"),
    ("red-400", "#f87171"),
    ("red-500", "#ef4444"),
    ("red-600", "#dc2626"),
    ("red-700", "#b91c1c"),
    ("red-800", "#991b1b"),
    ("red-900", "#7f1d1d"),
    ("red-950", "#450a0a"),
    ("orange-50", "#fff7ed"),
    ("orange-100", "#ffedd5"),
    ("orange-200", "#fed7aa"),
    ("orange-300", "#fdba74"),
    ("orange-400", "#fb923c"),
    ("orange-500", "#f97316"),
    ("orange-600", "#ea580c"),
    ("orange-700", "#c2410c"),
    ("orange-800", "#9a3412"),
    ("orange-900", "#7c2d12"),
    ("orange-950", "#431407"),
    ("amber-50", "#fffbeb"),
    ("amber-100", "#fef3c7"),
    ("amber-200", "#fde68a"),
    ("amber-300", "#fcd34d"),
    ("amber-400", "#fbbf24"),
    ("amber-500", "#f59e0b"),
    ("amber-600", "#d97706"),
    ("amber-700", "#b45309"),
    ("amber-800", "#92400e"),
    ("amber-900", "#78350f"),
    ("amber-950", "#451a03"),
    ("yellow-50", "#fefce8"),
    ("yellow-100", "#fef9c3"),
    ("yellow-200", "#fef08a"),
    ("yellow-300", "#fde047"),
    ("yellow-400", "#facc15"),
    ("yellow-500", "#eab308"),
    ("yellow-600", "#ca8a04"),
    ("yellow-700", "#a16207"),
    ("yellow-800", "#854d0e"),
    ("yellow-900", "#713f12"),
    ("yellow-950", "#422006"),
    ("lime-50", "#f7fee7"),
    ("lime-100", "#ecfccb"),
    ("lime-200", "#d9f99d"),
    ("lime-300", "#bef264"),
    ("lime-400", "#a3e635"),
    ("lime-500", "#84cc16"),
    ("lime-600", "#65a30d"),
    ("lime-700", "#4d7c0f"),
    ("lime-800", "#3f6212"),
    ("lime-900", "#365314"),
    ("lime-950", "#1a2e05"),
    ("green-50", "#f0fdf4"),
    ("green-100", "#dcfce7"),
    ("green-200", "#bbf7d0"),
    ("green-300", "#86efac"),
    ("green-400", "#4ade80"),
    ("green-500", "#22c55e"),
    ("green-600", "#16a34a"),
    ("green-700", "#15803d"),
    ("green-800", "#166534"),
    ("green-900", "#14532d"),
    ("green-950", "#052e16"),
    ("emerald-50", "#ecfdf5"),
    ("emerald-100", "#d1fae5"),
    ("emerald-200", "#a7f3d0"),
    ("emerald-300", "#6ee7b7"),
    ("emerald-400", "#34d399"),
    ("emerald-500", "#10b981"),
    ("emerald-600", "#059669"),
    ("emerald-700", "#047857"),
    ("emerald-800", "#065f46"),
    ("emerald-900", "#064e3b"),
    ("emerald-950", "#022c22"),
    ("teal-50", "#f0fdfa"),
    ("teal-100", "#ccfbf1"),
    ("teal-200", "#99f6e4"),
    ("teal-300", "#5eead4"),
    ("teal-400", "#2dd4bf"),
    ("teal-500", "#14b8a6"),
    ("teal-600", "#0d9488"),
    ("teal-700", "#0f766e"),
    ("teal-800", "#115e59"),
    ("teal-900", "#134e4a"),
    ("teal-950", "#042f2e"),
    ("cyan-50", "#ecfeff"),
    ("cyan-100", "#cffafe"),
    ("cyan-200", "#a5f3fc"),
    ("cyan-300", "#67e8f9"),
    ("cyan-400", "#22d3ee"),
    ("cyan-500", "#06b6d4"),
    ("cyan-600", "#0891b2"),
    ("cyan-700", "#0e7490"),
    ("cyan-800", "#155e75"),
    ("cyan-900", "#164e63"),
    ("cyan-950", "#083344"),
    ("sky-50", "#f0f9ff"),
    ("sky-100", "#e0f2fe"),
    ("sky-200", "#bae6fd"),
    ("sky-300", "#7dd3fc"),
    ("sky-400", "#38bdf8"),
    ("sky-500", "#0ea5e9"),
    ("sky-600", "#0284c7"),
    ("sky-700", "#0369a1"),
    ("sky-800", "#075985"),
    ("sky-900", "#0c4a6e"),
    ("sky-950", "#082f49"),
    ("blue-50", "#eff6ff"),
    ("blue-100", "#dbeafe"),
    ("blue-200", "#bfdbfe"),
    ("blue-300", "#93c5fd"),
    ("blue-400", "#60a5fa"),
    ("blue-500", "#3b82f6"),
    ("blue-600", "#2563eb"),
    ("blue-700", "#1d4ed8"),
    ("blue-800", "#1e40af"),
    ("blue-900", "#1e3a8a"),
    ("blue-950", "#172554"),
    ("indigo-50", "#eef2ff"),
    ("indigo-100", "#e0e7ff"),
    ("indigo-200", "#c7d2fe"),
    ("indigo-300", "#a5b4fc"),
    ("indigo-400", "#818cf8"),
    ("indigo-500", "#6366f1"),
    ("indigo-600", "#4f46e5"),
    ("indigo-700", "#4338ca"),
    ("indigo-800", "#3730a3"),
    ("indigo-900", "#312e81"),
    ("indigo-950", "#1e1b4b"),
    ("violet-50", "#f5f3ff"),
    ("violet-100", "#ede9fe"),
    ("violet-200", "#ddd6fe"),
    ("violet-300", "#c4b5fd"),
    ("violet-400", "#a78bfa"),
    ("violet-500", "#8b5cf6"),
    ("violet-600", "#7c3aed"),
    ("violet-700", "#6d28d9"),
    ("violet-800", "#5b21b6"),
    ("violet-900", "#4c1d95"),
    ("violet-950", "#2e1065"),
    ("purple-50", "#faf5ff"),
    ("purple-100", "#f3e8ff"),
    ("purple-200", "#e9d5ff"),
    ("purple-300", "#d8b4fe"),
    ("purple-400", "#c084fc"),
    ("purple-500", "#a855f7"),
    ("purple-600", "#9333ea"),
    ("purple-700", "#7e22ce"),
    ("purple-800", "#6b21a8"),
    ("purple-900", "#581c87"),
    ("purple-950", "#3b0764"),
    ("fuchsia-50", "#fdf4ff"),
    ("fuchsia-100", "#fae8ff"),
    ("fuchsia-200", "#f5d0fe"),
    ("fuchsia-300", "#f0abfc"),
    ("fuchsia-400", "#e879f9"),
    ("fuchsia-500", "#d946ef"),
    ("fuchsia-600", "#c026d3"),
    ("fuchsia-700", "#a21caf"),
    ("fuchsia-800", "#86198f"),
    ("fuchsia-900", "#701a75"),
    ("fuchsia-950", "#4a044e"),
    ("pink-50", "#fdf2f8"),
    ("pink-100", "#fce7f3"),
    ("pink-200", "#fbcfe8"),
    ("pink-300", "#f9a8d4"),
    ("pink-400", "#f472b6"),
    ("pink-500", "#ec4899"),
    ("pink-600", "#db2777"),
    ("pink-700", "#be185d"),
    ("pink-800", "#9d174d"),
    ("pink-900", "#831843"),
    ("pink-950", "#500724"),
    ("rose-50", "#fff1f2"),
    ("rose-100", "#ffe4e6"),
    ("rose-200", "#fecdd3"),
    ("rose-300", "#fda4af"),
    ("rose-400", "#fb7185"),
    ("rose-500", "#f43f5e"),
    ("rose-600", "#e11d48"),
    ("rose-700", "#be123c"),
    ("rose-800", "#9f1239"),
    ("rose-900", "#881337"),
    ("rose-950", "#4c0519"),
];

const BREAK_VALUES: &[&str] = &[
    "auto",
    "avoid",
    "all",
    "avoid-page",
    "page",
    "left",
    "right",
    "column",
];

const DISPLAY_VALUES: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "table",
    "inline-table",
    "table-caption",
    "table-cell",
    "table-column",
    "table-column-group",
    "table-footer-group",
    "table-header-group",
    "table-row-group",
    "table-row",
    "flow-root",
    "grid",
    "inline-grid",
    "contents",
    "list-item",
];

fn same(values: &[&str]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|value| (value.to_string(), value.to_string()))
        .collect()
}

fn pairs(values: &[(&str, &str)]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn keyword(
    prefix: &str,
    property: &str,
    values: Vec<(String, String)>,
    order: i32,
    arbitrary: bool,
) -> BaseClass {
    BaseClass::Keyword {
        prefix: prefix.to_string(),
        property: property.to_string(),
        values,
        order,
        arbitrary,
    }
}

pub fn default_base_classes() -> Vec<BaseClass> {
    let mut display_values = same(DISPLAY_VALUES);
    display_values.push(("hidden".to_string(), "none".to_string()));

    let mut columns = (1..=12)
        .map(|n| (n.to_string(), n.to_string()))
        .collect::<Vec<_>>();
    columns.extend(pairs(&[
        ("auto", "auto"),
        ("3xs", "16rem"),
        ("2xs", "18rem"),
        ("xs", "20rem"),
        ("sm", "24rem"),
        ("md", "28rem"),
        ("lg", "32rem"),
        ("xl", "36rem"),
        ("2xl", "42rem"),
        ("3xl", "48rem"),
        ("4xl", "56rem"),
        ("5xl", "64rem"),
        ("6xl", "72rem"),
        ("7xl", "80rem"),
    ]));

    vec![
        keyword(
            "aspect",
            "aspect-ratio",
            pairs(&[("auto", "auto"), ("square", "1 / 1"), ("video", "16 / 9")]),
            ASPECT_RATIO_ORDER,
            true,
        ),
        keyword("columns", "columns", columns, COLUMNS_ORDER, true),
        keyword(
            "break-before",
            "break-before",
            same(BREAK_VALUES),
            BREAK_BEFORE_ORDER,
            false,
        ),
        keyword(
            "break-inside",
            "break-inside",
            same(&["auto", "avoid", "avoid-page", "avoid-column"]),
            BREAK_INSIDE_ORDER,
            false,
        ),
        keyword(
            "break-after",
            "break-after",
            same(BREAK_VALUES),
            BREAK_AFTER_ORDER,
            false,
        ),
        keyword(
            "box-decoration",
            "box-decoration-break",
            same(&["clone", "slice"]),
            BOX_DECORATION_ORDER,
            false,
        ),
        keyword(
            "box",
            "box-sizing",
            pairs(&[("border", "border-box"), ("content", "content-box")]),
            BOX_SIZING_ORDER,
            false,
        ),
        keyword("", "display", display_values, DISPLAY_ORDER, false),
        keyword(
            "float",
            "float",
            pairs(&[
                ("start", "inline-start"),
                ("end", "inline-end"),
                ("left", "left"),
                ("right", "right"),
                ("none", "none"),
            ]),
            FLOAT_ORDER,
            false,
        ),
        keyword(
            "clear",
            "clear",
            pairs(&[
                ("start", "inline-start"),
                ("end", "inline-end"),
                ("left", "left"),
                ("right", "right"),
                ("both", "both"),
                ("none", "none"),
            ]),
            CLEAR_ORDER,
            false,
        ),
        keyword(
            "",
            "isolation",
            pairs(&[("isolate", "isolate"), ("isolation-auto", "auto")]),
            ISOLATION_ORDER,
            false,
        ),
        BaseClass::NumericScale {
            prefix: "basis".to_string(),
            property: "flex-basis".to_string(),
            keywords: pairs(&[("auto", "auto"), ("full", "100%")]),
            order: FLEX_BASIS_ORDER,
        },
        keyword(
            "flex",
            "flex-direction",
            pairs(&[
                ("row", "row"),
                ("row-reverse", "row-reverse"),
                ("col", "column"),
                ("col-reverse", "column-reverse"),
            ]),
            FLEX_DIRECTION_ORDER,
            false,
        ),
        keyword(
            "flex",
            "flex-wrap",
            same(&["wrap", "wrap-reverse", "nowrap"]),
            FLEX_WRAP_ORDER,
            false,
        ),
        keyword(
            "grow",
            "flex-grow",
            pairs(&[("", "1"), ("0", "0")]),
            GROW_ORDER,
            true,
        ),
        BaseClass::ColorScale {
            prefix: "bg".to_string(),
            property: "background-color".to_string(),
            order: BACKGROUND_COLOR_ORDER,
        },
        BaseClass::ColorScale {
            prefix: "text".to_string(),
            property: "color".to_string(),
            order: TEXT_COLOR_ORDER,
        },
        keyword(
            "text",
            "text-wrap",
            same(&["wrap", "nowrap", "balance", "pretty"]),
            TEXT_WRAP_ORDER,
            false,
        ),
        BaseClass::ArbitraryPassthrough {
            order: ARBITRARY_PROPERTY_ORDER,
        },
    ]
}
