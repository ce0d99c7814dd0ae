//! UI strings in English and Arabic.
//!
//! Every table is an exhaustive `match` over [`Key`], so adding a key without
//! translating it in both languages does not compile.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

/// Reading direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl Language {
    /// Short tag used for persistence and the document `lang` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::En => TextDirection::Ltr,
            Language::Ar => TextDirection::Rtl,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    AppTitle,
    PickColor,
    Favorites,
    Themes,
    Help,
    Preview,
    Opacity,
    Save,
    Share,
    ShareColor,
    ColorDetails,
    Copied,
    NoFavorites,
    ThemeGallery,
    TapToLoad,
    Language,
    DarkMode,
    LightMode,
    HexInput,
    PickerPanel,
    Saved,
    Removed,
    ShareSaved,
    NotSaved,
}

pub fn translate(lang: Language, key: Key) -> &'static str {
    match lang {
        Language::En => en(key),
        Language::Ar => ar(key),
    }
}

fn en(key: Key) -> &'static str {
    match key {
        Key::AppTitle => "ColorPicker Pro",
        Key::PickColor => "Pick Color",
        Key::Favorites => "Favorites",
        Key::Themes => "Themes",
        Key::Help => "Help",
        Key::Preview => "Live Preview",
        Key::Opacity => "Opacity",
        Key::Save => "Save",
        Key::Share => "Share",
        Key::ShareColor => "Share Color",
        Key::ColorDetails => "Color Details",
        Key::Copied => "Copied!",
        Key::NoFavorites => "No favorite colors yet",
        Key::ThemeGallery => "Theme Gallery",
        Key::TapToLoad => "Press Enter to load",
        Key::Language => "Language",
        Key::DarkMode => "Dark Mode",
        Key::LightMode => "Light Mode",
        Key::HexInput => "Color",
        Key::PickerPanel => "Picker",
        Key::Saved => "Saved to favorites",
        Key::Removed => "Removed from favorites",
        Key::ShareSaved => "Share image saved",
        Key::NotSaved => "Not saved",
    }
}

fn ar(key: Key) -> &'static str {
    match key {
        Key::AppTitle => "منتقي الألوان برو",
        Key::PickColor => "اختر لونًا",
        Key::Favorites => "المفضلة",
        Key::Themes => "السمات",
        Key::Help => "مساعدة",
        Key::Preview => "معاينة مباشرة",
        Key::Opacity => "الشفافية",
        Key::Save => "حفظ",
        Key::Share => "مشاركة",
        Key::ShareColor => "مشاركة اللون",
        Key::ColorDetails => "تفاصيل اللون",
        Key::Copied => "تم النسخ!",
        Key::NoFavorites => "لا توجد ألوان مفضلة بعد",
        Key::ThemeGallery => "معرض السمات",
        Key::TapToLoad => "اضغط Enter للتحميل",
        Key::Language => "اللغة",
        Key::DarkMode => "الوضع الداكن",
        Key::LightMode => "الوضع الفاتح",
        Key::HexInput => "اللون",
        Key::PickerPanel => "المنتقي",
        Key::Saved => "تمت الإضافة إلى المفضلة",
        Key::Removed => "تمت الإزالة من المفضلة",
        Key::ShareSaved => "تم حفظ صورة المشاركة",
        Key::NotSaved => "لم يتم الحفظ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_roundtrip() {
        for lang in [Language::En, Language::Ar] {
            assert_eq!(Language::from_tag(lang.tag()), Some(lang));
        }
        assert_eq!(Language::from_tag("fr"), None);
        assert_eq!(Language::from_tag("EN"), None);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Language::En.direction(), TextDirection::Ltr);
        assert_eq!(Language::Ar.direction(), TextDirection::Rtl);
        assert_eq!(Language::Ar.other(), Language::En);
    }

    #[test]
    fn test_translate_differs_per_language() {
        assert_eq!(translate(Language::En, Key::Save), "Save");
        assert_eq!(translate(Language::Ar, Key::Save), "حفظ");
        assert_eq!(translate(Language::En, Key::NotSaved), "Not saved");
        assert_eq!(translate(Language::Ar, Key::NotSaved), "لم يتم الحفظ");
        assert_ne!(
            translate(Language::En, Key::Favorites),
            translate(Language::Ar, Key::Favorites)
        );
    }
}
