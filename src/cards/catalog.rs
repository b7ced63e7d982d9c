use super::{Background, Background::{Gradient, Image, Pattern, Solid}, TemplateSpec};

// Background, border and shadow payloads are presentation strings passed
// through to the rendering client untouched; the core never interprets them.
const fn css(
    id: &'static str,
    name: &'static str,
    background: Background,
    text_color: &'static str,
) -> TemplateSpec {
    TemplateSpec {
        id,
        name,
        background,
        text_color,
        font_family: None,
        border: None,
        shadow: None,
        emoji: None,
    }
}

// The default entry must stay first: unknown ids resolve to CATALOG[0].
pub static CATALOG: [TemplateSpec; 45] = [
    TemplateSpec {
        id: "default",
        name: "Default",
        background: Solid("bg-white dark:bg-dark-card"),
        text_color: "text-gray-800 dark:text-white",
        font_family: None,
        border: None,
        shadow: Some("shadow-md"),
        emoji: None,
    },
    TemplateSpec {
        id: "gradient-purple",
        name: "Purple Gradient",
        background: Gradient("bg-gradient-to-r from-purple-500 to-pink-500"),
        text_color: "text-white",
        font_family: None,
        border: None,
        shadow: Some("shadow-lg"),
        emoji: None,
    },
    TemplateSpec {
        id: "gradient-blue",
        name: "Blue Ocean",
        background: Gradient("bg-gradient-to-r from-blue-400 to-teal-500"),
        text_color: "text-white",
        font_family: None,
        border: None,
        shadow: Some("shadow-lg"),
        emoji: None,
    },
    TemplateSpec {
        id: "sunshine",
        name: "Sunshine",
        background: Gradient("bg-gradient-to-r from-yellow-300 to-amber-500"),
        text_color: "text-gray-900",
        font_family: None,
        border: None,
        shadow: None,
        emoji: Some("☀️"),
    },
    TemplateSpec {
        id: "dark-elegance",
        name: "Dark Elegance",
        background: Solid("bg-gray-900"),
        text_color: "text-white",
        font_family: None,
        border: Some("border-2 border-purple-500"),
        shadow: Some("shadow-xl"),
        emoji: None,
    },
    TemplateSpec {
        id: "nature",
        name: "Nature",
        background: Gradient("bg-gradient-to-r from-green-400 to-emerald-500"),
        text_color: "text-white",
        font_family: None,
        border: None,
        shadow: None,
        emoji: Some("🌿"),
    },
    TemplateSpec {
        id: "pastel-pink",
        name: "Pastel Pink",
        background: Solid("bg-pink-200"),
        text_color: "text-pink-800",
        font_family: None,
        border: Some("border border-pink-300"),
        shadow: None,
        emoji: None,
    },
    TemplateSpec {
        id: "vibrant-coral",
        name: "Vibrant Coral",
        background: Gradient("bg-gradient-to-r from-orange-400 to-pink-500"),
        text_color: "text-white",
        font_family: None,
        border: None,
        shadow: Some("shadow-lg"),
        emoji: None,
    },
    TemplateSpec {
        id: "midnight-blue",
        name: "Midnight Blue",
        background: Gradient("bg-gradient-to-r from-blue-900 to-indigo-900"),
        text_color: "text-blue-100",
        font_family: None,
        border: None,
        shadow: Some("shadow-lg"),
        emoji: None,
    },
    TemplateSpec {
        id: "minimalist",
        name: "Minimalist",
        background: Solid("bg-gray-50 dark:bg-gray-800"),
        text_color: "text-gray-800 dark:text-gray-100",
        font_family: None,
        border: Some("border border-gray-200 dark:border-gray-700"),
        shadow: None,
        emoji: None,
    },
    TemplateSpec {
        id: "sunset",
        name: "Sunset",
        background: Gradient("bg-gradient-to-r from-red-500 to-yellow-500"),
        text_color: "text-white",
        font_family: None,
        border: None,
        shadow: None,
        emoji: Some("🌅"),
    },
    TemplateSpec {
        id: "neon",
        name: "Neon",
        background: Solid("bg-black"),
        text_color: "text-green-400",
        font_family: None,
        border: Some("border-2 border-green-400"),
        shadow: Some("shadow-lg shadow-green-400/50"),
        emoji: None,
    },
    TemplateSpec {
        id: "sky",
        name: "Sky",
        background: Gradient("bg-gradient-to-b from-blue-300 to-blue-500"),
        text_color: "text-white",
        font_family: None,
        border: None,
        shadow: None,
        emoji: Some("☁️"),
    },
    TemplateSpec {
        id: "vintage",
        name: "Vintage",
        background: Solid("bg-amber-100"),
        text_color: "text-amber-900",
        font_family: Some("font-serif"),
        border: Some("border-2 border-amber-800"),
        shadow: None,
        emoji: None,
    },
    TemplateSpec {
        id: "galaxy",
        name: "Galaxy",
        background: Gradient("bg-gradient-to-r from-purple-900 via-violet-800 to-purple-900"),
        text_color: "text-white",
        font_family: None,
        border: None,
        shadow: Some("shadow-lg"),
        emoji: Some("✨"),
    },
    TemplateSpec {
        id: "forest",
        name: "Forest",
        background: Gradient("bg-gradient-to-r from-green-800 to-emerald-900"),
        text_color: "text-green-100",
        font_family: None,
        border: None,
        shadow: None,
        emoji: Some("🌲"),
    },
    TemplateSpec {
        id: "beach",
        name: "Beach",
        background: Gradient("bg-gradient-to-r from-blue-400 to-yellow-300"),
        text_color: "text-gray-800",
        font_family: None,
        border: None,
        shadow: None,
        emoji: Some("🏖️"),
    },
    TemplateSpec {
        id: "fire",
        name: "Fire",
        background: Gradient("bg-gradient-to-r from-red-600 to-yellow-600"),
        text_color: "text-white",
        font_family: None,
        border: None,
        shadow: None,
        emoji: Some("🔥"),
    },
    TemplateSpec {
        id: "ice",
        name: "Ice",
        background: Gradient("bg-gradient-to-r from-blue-100 to-blue-300"),
        text_color: "text-blue-900",
        font_family: None,
        border: None,
        shadow: None,
        emoji: Some("❄️"),
    },
    TemplateSpec {
        id: "dark-mode",
        name: "Dark Mode",
        background: Solid("bg-gray-900"),
        text_color: "text-gray-100",
        font_family: None,
        border: Some("border border-gray-700"),
        shadow: None,
        emoji: None,
    },
    css(
        "img1",
        "Photo 1",
        Image("url(https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=600&q=80) center/cover no-repeat"),
        "#fff",
    ),
    css(
        "img2",
        "Photo 2",
        Image("url(https://images.unsplash.com/photo-1465101046530-73398c7f28ca?auto=format&fit=crop&w=600&q=80) center/cover no-repeat"),
        "#fff",
    ),
    css(
        "img3",
        "Photo 3",
        Image("url(https://images.unsplash.com/photo-1519125323398-675f0ddb6308?auto=format&fit=crop&w=600&q=80) center/cover no-repeat"),
        "#fff",
    ),
    css(
        "img4",
        "Photo 4",
        Image("url(https://images.unsplash.com/photo-1465101178521-c1a9136a3b99?auto=format&fit=crop&w=600&q=80) center/cover no-repeat"),
        "#fff",
    ),
    css(
        "img5",
        "Photo 5",
        Image("url(https://images.unsplash.com/photo-1502082553048-f009c37129b9?auto=format&fit=crop&w=600&q=80) center/cover no-repeat"),
        "#fff",
    ),
    css(
        "gradient1",
        "Gradient 1",
        Gradient("linear-gradient(135deg, #f6d365 0%, #fda085 100%)"),
        "#fff",
    ),
    css(
        "gradient2",
        "Gradient 2",
        Gradient("linear-gradient(135deg, #a18cd1 0%, #fbc2eb 100%)"),
        "#fff",
    ),
    css(
        "gradient3",
        "Gradient 3",
        Gradient("linear-gradient(135deg, #f093fb 0%, #f5576c 100%)"),
        "#fff",
    ),
    css(
        "gradient4",
        "Gradient 4",
        Gradient("linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)"),
        "#fff",
    ),
    css(
        "gradient5",
        "Gradient 5",
        Gradient("linear-gradient(135deg, #30cfd0 0%, #330867 100%)"),
        "#fff",
    ),
    css(
        "pattern1",
        "Pattern 1",
        Pattern("repeating-linear-gradient(45deg, #f5f7fa, #f5f7fa 10px, #c3cfe2 10px, #c3cfe2 20px)"),
        "#fff",
    ),
    css(
        "pattern2",
        "Pattern 2",
        Pattern("radial-gradient(circle, #fff1eb 0%, #ace0f9 100%)"),
        "#fff",
    ),
    css(
        "pattern3",
        "Pattern 3",
        Pattern("repeating-linear-gradient(135deg, #f8ffae, #f8ffae 15px, #43cea2 15px, #43cea2 30px)"),
        "#fff",
    ),
    css(
        "pattern4",
        "Pattern 4",
        Pattern("radial-gradient(circle, #fbc2eb 0%, #a6c1ee 100%)"),
        "#fff",
    ),
    css(
        "pattern5",
        "Pattern 5",
        Pattern("repeating-linear-gradient(90deg, #f5f7fa, #f5f7fa 20px, #c3cfe2 20px, #c3cfe2 40px)"),
        "#fff",
    ),
    css(
        "special1",
        "Special 1",
        Gradient("linear-gradient(120deg, #f6d365 0%, #fd6e6a 100%)"),
        "#fff",
    ),
    css(
        "special2",
        "Special 2",
        Gradient("linear-gradient(120deg, #96fbc4 0%, #f9f586 100%)"),
        "#fff",
    ),
    css(
        "special3",
        "Special 3",
        Gradient("linear-gradient(120deg, #c471f5 0%, #fa71cd 100%)"),
        "#fff",
    ),
    css(
        "special4",
        "Special 4",
        Gradient("linear-gradient(120deg, #48c6ef 0%, #6f86d6 100%)"),
        "#fff",
    ),
    css(
        "special5",
        "Special 5",
        Gradient("linear-gradient(120deg, #fe8c00 0%, #f83600 100%)"),
        "#fff",
    ),
    css(
        "premium1",
        "Premium 1",
        Gradient("linear-gradient(135deg, #e0c3fc 0%, #8ec5fc 100%)"),
        "#fff",
    ),
    css(
        "premium2",
        "Premium 2",
        Gradient("linear-gradient(135deg, #f093fb 0%, #f5576c 100%)"),
        "#fff",
    ),
    css(
        "premium3",
        "Premium 3",
        Gradient("linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)"),
        "#fff",
    ),
    css(
        "premium4",
        "Premium 4",
        Gradient("linear-gradient(135deg, #30cfd0 0%, #330867 100%)"),
        "#fff",
    ),
    css(
        "premium5",
        "Premium 5",
        Gradient("linear-gradient(135deg, #f7971e 0%, #ffd200 100%)"),
        "#fff",
    ),
];

// Index order is load-bearing: public_font() indexes by template id length.
pub static FANCY_FONTS: [&str; 20] = [
    "\"Pacifico\", cursive",
    "\"Lobster\", cursive",
    "\"Bebas Neue\", sans-serif",
    "\"Dancing Script\", cursive",
    "\"Indie Flower\", cursive",
    "\"Shadows Into Light\", cursive",
    "\"Orbitron\", sans-serif",
    "\"Monoton\", cursive",
    "\"Bangers\", cursive",
    "\"Fira Code\", monospace",
    "\"Satisfy\", cursive",
    "\"Abril Fatface\", cursive",
    "\"Fredoka One\", cursive",
    "\"Luckiest Guy\", cursive",
    "\"Permanent Marker\", cursive",
    "\"Russo One\", sans-serif",
    "\"Amatic SC\", cursive",
    "\"Caveat\", cursive",
    "\"Quicksand\", sans-serif",
    "\"Baloo 2\", cursive",
];
