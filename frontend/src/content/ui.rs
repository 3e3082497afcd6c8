use shared::Language;

/// The full set of UI strings for one language.
///
/// Confidence band messages and the handbook section headers are not
/// localized; every language carries the same English phrasing.
pub struct UiStrings {
    pub app_title: &'static str,
    pub subtitle: &'static str,
    pub diagnose_tab: &'static str,
    pub explore_tab: &'static str,
    pub language_hint: &'static str,

    pub select_leaf_hint: &'static str,
    pub gallery: &'static str,
    pub camera: &'static str,
    pub drop_hint: &'static str,
    pub analyze: &'static str,
    pub analyzing: &'static str,

    pub select_photo_alert: &'static str,
    pub analysis_failed: &'static str,
    pub open_link_failed: &'static str,

    pub high_confidence: &'static str,
    pub reliable: &'static str,
    pub low_confidence: &'static str,

    pub symptoms: &'static str,
    pub conditions: &'static str,
    pub pathogen: &'static str,
    pub management: &'static str,
    pub details_not_found: &'static str,
    pub find_service_center: &'static str,

    pub explore_title: &'static str,
    pub tab_guide: &'static str,
    pub tab_tips: &'static str,
    pub tab_history: &'static str,
    pub guide_title: &'static str,
    pub diseases_section: &'static str,
    pub pests_section: &'static str,
    pub tips_title: &'static str,
    pub videos_title: &'static str,
    pub history_title: &'static str,
    pub no_history: &'static str,
    pub delete_prompt: &'static str,
}

pub fn strings(language: Language) -> &'static UiStrings {
    match language {
        Language::En => &EN,
        Language::Si => &SI,
        Language::Ta => &TA,
    }
}

static EN: UiStrings = UiStrings {
    app_title: "AI CornCare",
    subtitle: "Corn Leaf Disease Diagnosis System",
    diagnose_tab: "Diagnose",
    explore_tab: "Explore",
    language_hint: "Select Language",

    select_leaf_hint: "Select a corn leaf",
    gallery: "Gallery",
    camera: "Camera",
    drop_hint: "Drag & drop a photo here, paste, or use the buttons above",
    analyze: "Analyze Now",
    analyzing: "Analyzing...",

    select_photo_alert: "Please select a photo.",
    analysis_failed: "Analysis failed. Check your internet or server.",
    open_link_failed: "Could not open the link.",

    high_confidence: "High Confidence",
    reliable: "Reliable",
    low_confidence: "Check again with a clearer photo",

    symptoms: "Symptoms:",
    conditions: "Conditions & Timing:",
    pathogen: "Causal Pathogen:",
    management: "Disease Management:",
    details_not_found: "Details not found for this diagnosis.",
    find_service_center: "Find Service Center",

    explore_title: "Explore 🌽",
    tab_guide: "Guide",
    tab_tips: "Tips",
    tab_history: "History",
    guide_title: "Agri Handbook 📖",
    diseases_section: "Diseases",
    pests_section: "Pests",
    tips_title: "Care Tips 💡",
    videos_title: "Video Tutorials",
    history_title: "Scan History 📜",
    no_history: "No scan history found.",
    delete_prompt: "Delete this record?",
};

static SI: UiStrings = UiStrings {
    app_title: "AI CornCare",
    subtitle: "බඩඉරිඟු පත්‍ර රෝග හඳුනාගැනීමේ පද්ධතිය",
    diagnose_tab: "පරීක්ෂාව",
    explore_tab: "ගවේෂණය",
    language_hint: "භාෂාව තෝරන්න",

    select_leaf_hint: "බඩඉරිඟු පත්‍රයක් තෝරන්න",
    gallery: "ගැලරිය",
    camera: "කැමරාව",
    drop_hint: "ඡායාරූපයක් මෙතැනට ඇද දමන්න, අලවන්න, නැතහොත් ඉහත බොත්තම් භාවිතා කරන්න",
    analyze: "විශ්ලේෂණය කරන්න",
    analyzing: "විශ්ලේෂණය වෙමින්...",

    select_photo_alert: "කරුණාකර ඡායාරූපයක් තෝරන්න.",
    analysis_failed: "විශ්ලේෂණය අසාර්ථකයි. අන්තර්ජාල සම්බන්ධතාවය පරීක්ෂා කරන්න.",
    open_link_failed: "සබැඳිය විවෘත කළ නොහැක.",

    high_confidence: "High Confidence",
    reliable: "Reliable",
    low_confidence: "Check again with a clearer photo",

    symptoms: "රෝග ලක්ෂණ:",
    conditions: "හිතකර තත්ත්වයන්:",
    pathogen: "රෝග කාරකයා:",
    management: "කළමනාකරණය:",
    details_not_found: "මෙම ප්‍රතිඵලයට අදාළ විස්තර හමු නොවීය.",
    find_service_center: "ළඟම සේවා මධ්‍යස්ථානය සොයන්න",

    explore_title: "ගවේෂණය 🌽",
    tab_guide: "මගපෙන්වීම",
    tab_tips: "උපදෙස්",
    tab_history: "ඉතිහාසය",
    guide_title: "වගා අත්පොත 📖",
    diseases_section: "Diseases",
    pests_section: "Pests",
    tips_title: "වගා උපදෙස් 💡",
    videos_title: "උපදෙස් වීඩියෝ",
    history_title: "පරීක්ෂණ ඉතිහාසය 📜",
    no_history: "පරීක්ෂණ දත්ත හමු නොවීය.",
    delete_prompt: "මෙම වාර්තාව මකන්නද?",
};

static TA: UiStrings = UiStrings {
    app_title: "AI CornCare",
    subtitle: "மக்காச்சோள இலை நோய் கண்டறிதல் அமைப்பு",
    diagnose_tab: "பரிசோதனை",
    explore_tab: "ஆராய்க",
    language_hint: "மொழியைத் தேர்ந்தெடுக்கவும்",

    select_leaf_hint: "மக்காச்சோள இலையைத் தேர்ந்தெடுக்கவும்",
    gallery: "கேலரி",
    camera: "கேமரா",
    drop_hint: "புகைப்படத்தை இங்கே இழுத்து விடவும், ஒட்டவும், அல்லது மேலே உள்ள பொத்தான்களைப் பயன்படுத்தவும்",
    analyze: "பகுப்பாய்வு செய்",
    analyzing: "பகுப்பாய்வு நடைபெறுகிறது...",

    select_photo_alert: "தயவுசெய்து புகைப்படத்தைத் தேர்ந்தெடுக்கவும்.",
    analysis_failed: "பகுப்பாய்வு தோல்வியடைந்தது. இணைய இணைப்பைச் சரிபார்க்கவும்.",
    open_link_failed: "இணைப்பைத் திறக்க முடியவில்லை.",

    high_confidence: "High Confidence",
    reliable: "Reliable",
    low_confidence: "Check again with a clearer photo",

    symptoms: "அறிகுறிகள்:",
    conditions: "சாதகமான சூழல்:",
    pathogen: "காரணி:",
    management: "மேலாண்மை:",
    details_not_found: "இந்த முடிவுக்கான விவரங்கள் கிடைக்கவில்லை.",
    find_service_center: "அருகிலுள்ள சேவை மையம்",

    explore_title: "ஆராய்ந்து பாருங்கள் 🌽",
    tab_guide: "வழிகாட்டி",
    tab_tips: "குறிப்புகள்",
    tab_history: "வரலாறு",
    guide_title: "விவசாய கையேடு 📖",
    diseases_section: "Diseases",
    pests_section: "Pests",
    tips_title: "பராமரிப்பு குறிப்புகள் 💡",
    videos_title: "பயிற்சி வீடியோக்கள்",
    history_title: "பரிசோதனை வரலாறு 📜",
    no_history: "வரலாறு எதுவும் இல்லை.",
    delete_prompt: "இந்த பதிவை நீக்கவா?",
};
