use shared::Language;

/// One expandable handbook card.
pub struct GuideEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
}

/// One growing-stage section of the care tips tab.
pub struct TipsSection {
    pub title: &'static str,
    pub tips: &'static [&'static str],
}

pub struct VideoTutorial {
    pub title: &'static str,
    pub url: &'static str,
}

pub static VIDEO_TUTORIALS: &[VideoTutorial] = &[
    VideoTutorial {
        title: "Identifying corn leaf diseases",
        url: "https://www.youtube.com/results?search_query=corn+leaf+disease+identification",
    },
    VideoTutorial {
        title: "Managing corn leaf blight",
        url: "https://www.youtube.com/results?search_query=northern+corn+leaf+blight+management",
    },
];

pub fn disease_guide(language: Language) -> &'static [GuideEntry] {
    match language {
        Language::En => EN_DISEASES,
        Language::Si => SI_DISEASES,
        Language::Ta => TA_DISEASES,
    }
}

pub fn pest_guide(language: Language) -> &'static [GuideEntry] {
    match language {
        Language::En => EN_PESTS,
        Language::Si => SI_PESTS,
        Language::Ta => TA_PESTS,
    }
}

pub fn growing_tips(language: Language) -> &'static [TipsSection] {
    match language {
        Language::En => EN_TIPS,
        Language::Si => SI_TIPS,
        Language::Ta => TA_TIPS,
    }
}

static EN_DISEASES: &[GuideEntry] = &[
    GuideEntry {
        id: "d1",
        name: "Leaf Blight",
        summary: "Development worsened by over 6 hours of leaf wetness and moderate temperatures (65-82°F). Lesions develop 7-12 days after infection.",
    },
    GuideEntry {
        id: "d2",
        name: "Common Rust",
        summary: "Caused by Puccinia sorghi. Appears as small, oval dark-reddish-brown pustules on both leaf surfaces.",
    },
    GuideEntry {
        id: "d3",
        name: "Anthracnose",
        summary: "Attacks at various stages. Early as leaf blight, later causing 'top dieback' or stalk rot.",
    },
    GuideEntry {
        id: "d4",
        name: "Eyespot",
        summary: "Small, light green circular lesions with yellow halos. Develops brown/purple rings as they age.",
    },
    GuideEntry {
        id: "d5",
        name: "Tar Spot",
        summary: "Raised, circular black spots that cannot be rubbed or scraped off. Thrives in cool, wet conditions.",
    },
];

static EN_PESTS: &[GuideEntry] = &[
    GuideEntry {
        id: "p1",
        name: "Corn Rootworm (CRW)",
        summary: "• Identification: Larvae feed on roots in June/July. Causes scars, tunneling, or roots chewed to the base.\n• Impact: Lodging, reduced water/nutrient uptake.\n• Action: Perform root digs and use yellow sticky traps.",
    },
    GuideEntry {
        id: "p2",
        name: "Black Cutworm",
        summary: "• Identification: Causes 'dead heart'. Cuts young plants at soil surface.\n• Larvae: Black/pale-gray, grainy skin.\n• Action: Timely scouting early in the season is key.",
    },
    GuideEntry {
        id: "p3",
        name: "Fall Armyworm (FAW)",
        summary: "• Identification: Damages leaf or ear tissues. Ragged edges in leaves.\n• Larvae: Inverted 'Y' on head.\n• Action: Pull and unroll whorls to make larval counts.",
    },
    GuideEntry {
        id: "p4",
        name: "Corn Earworm (CEW)",
        summary: "• Identification: Favors ear feeding. Extensive excrement at the ear tip.\n• Impact: Entry point for fungal pathogens.\n• Action: Use pheromone traps.",
    },
    GuideEntry {
        id: "p5",
        name: "Western Bean Cutworm",
        summary: "• Identification: Feeds on tassels, silks, and kernels.\n• Larvae: Two black squares above the head.\n• Action: Scout for egg masses on upper leaf surfaces.",
    },
];

static EN_TIPS: &[TipsSection] = &[
    TipsSection {
        title: "1. Planting & Early Stage (0-4 Weeks)",
        tips: &[
            "Seed Depth: Plant 1-2 inches deep in moist soil.",
            "Gap Filling: Replace missing plants within 7-10 days.",
        ],
    },
    TipsSection {
        title: "2. Growth & Flowering (5-10 Weeks)",
        tips: &[
            "Fertilizer: Apply Urea at 4th and 8th weeks.",
            "Watering: Critical during tasseling and silking stages.",
        ],
    },
    TipsSection {
        title: "3. Maturation & Harvesting (12+ Weeks)",
        tips: &[
            "Indicator: Harvest when kernels are hard and moisture is low.",
            "Storage: Dry grains properly to avoid weevil attacks.",
        ],
    },
];

static SI_DISEASES: &[GuideEntry] = &[
    GuideEntry {
        id: "d1",
        name: "කොළ පාළුව (Blight)",
        summary: "පැය 6කට වඩා පත්‍ර තෙත්ව පැවතීම නිසා වර්ධනය වේ. ආසාදනය වී දින 7-12 අතර ලප ඇතිවේ.",
    },
    GuideEntry {
        id: "d2",
        name: "මලකඩ රෝගය (Common Rust)",
        summary: "පත්‍ර දෙපසම කුඩා ඕවලාකාර තද රතු-දුඹුරු බිබිලි ඇතිවේ.",
    },
    GuideEntry {
        id: "d3",
        name: "ඇන්ත්‍රැක්නෝස් (Anthracnose)",
        summary: "මුල් කාලයේ පත්‍ර පාළුවක් ලෙසත්, පසුව කඳ කුණුවීමටත් හේතු වේ.",
    },
    GuideEntry {
        id: "d4",
        name: "අයිස්පොට් (Eyespot)",
        summary: "කහ වටයක් සහිත ලා කොළ පාට ලප ඇතිවේ.",
    },
    GuideEntry {
        id: "d5",
        name: "ටාර් ස්පොට් (Tar Spot)",
        summary: "පත්‍ර මත මැකීමට නොහැකි කුඩා කළු පැහැති තද ලප ඇතිවේ.",
    },
];

static SI_PESTS: &[GuideEntry] = &[
    GuideEntry {
        id: "p1",
        name: "මුල් පණුවා (Corn Rootworm)",
        summary: "• හඳුනාගැනීම: ජූනි/ජූලි කාලයේ මුල් ආහාරයට ගනී. මේ නිසා ජලය සහ පෝෂක උරා ගැනීම අඩාල වේ.\n• පියවර: මුල් හාරා පරික්ෂා කිරීම සහ කහ පැහැති ඇලෙන සුළු උගුල් භාවිතය.",
    },
    GuideEntry {
        id: "p2",
        name: "කළු කපන පණුවා (Black Cutworm)",
        summary: "• හඳුනාගැනීම: ළපටි පැළ පාමුලින් කපා 'Dead Heart' තත්ත්වය ඇති කරයි.\n• පියවර: වගාවේ මුල් අවධියේදී නිරන්තරයෙන් නිරීක්ෂණය කරන්න.",
    },
    GuideEntry {
        id: "p3",
        name: "සේනා දළඹුවා (Fall Armyworm)",
        summary: "• හඳුනාගැනීම: පත්‍ර සහ කරල් විනාශ කරයි. පත්‍රවල සිදුරු ඇති කරයි.\n• ලක්ෂණ: හිස මත 'Y' සලකුණක් ඇත.",
    },
    GuideEntry {
        id: "p4",
        name: "කරල් විදින පණුවා (Corn Earworm)",
        summary: "• හඳුනාගැනීම: කරල්වල අග කොටසට හානි කරයි. කරල අග අසූචි දක්නට ලැබේ.",
    },
    GuideEntry {
        id: "p5",
        name: "බීන් කට්වර්ම් (Bean Cutworm)",
        summary: "• හඳුනාගැනීම: මල් මංජරිය සහ කරල්වල බීජ ආහාරයට ගනී.\n• ලක්ෂණ: හිසට ඉහළින් කළු පැහැති කොටු දෙකක් ඇත.",
    },
];

static SI_TIPS: &[TipsSection] = &[
    TipsSection {
        title: "1. සිටුවීම සහ මුල් අවධිය (සති 0-4)",
        tips: &[
            "බීජ ගැඹුර: අඟල් 1-2 ක් ගැඹුරින් තෙතමනය සහිත පසෙහි සිටුවන්න.",
            "අඩුව පිරවීම: පැළ නොවූ තැන් ඇත්නම් දින 10 ක් තුළ නැවත සිටුවන්න.",
        ],
    },
    TipsSection {
        title: "2. වර්ධනය සහ මල් පිපීම (සති 5-10)",
        tips: &[
            "පොහොර: වගාවට සති 4 දී සහ 8 දී යූරියා පොහොර යොදන්න.",
            "ජල සම්පාදනය: කරල් මතුවන කාලයේ තෙතමනය අත්‍යවශ්‍ය වේ.",
        ],
    },
    TipsSection {
        title: "3. මේරීම සහ අස්වනු නෙළීම (සති 12+)",
        tips: &[
            "හඳුනාගැනීම: බීජ තද වී පත්‍ර වියළී ගිය පසු අස්වනු නෙළන්න.",
            "ගබඩා කිරීම: බීජ හොඳින් වියළා ගබඩා කරන්න.",
        ],
    },
];

static TA_DISEASES: &[GuideEntry] = &[
    GuideEntry {
        id: "d1",
        name: "இலைக் கருகல் (Blight)",
        summary: "6 மணி நேரத்திற்கும் மேலான இலை ஈரமும் மிதமான வெப்பநிலையும் நோயை வளர்க்கும். தொற்று ஏற்பட்ட 7-12 நாட்களில் வடுக்கள் தோன்றும்.",
    },
    GuideEntry {
        id: "d2",
        name: "துரு நோய் (Common Rust)",
        summary: "இலையின் இரு பக்கங்களிலும் சிறிய நீள்வட்ட கரும் சிவப்பு-பழுப்பு கொப்புளங்கள் தோன்றும்.",
    },
    GuideEntry {
        id: "d3",
        name: "ஆந்த்ராக்னோஸ் (Anthracnose)",
        summary: "ஆரம்பத்தில் இலைக் கருகலாகவும், பின்னர் தண்டு அழுகலாகவும் தாக்கும்.",
    },
    GuideEntry {
        id: "d4",
        name: "கண் புள்ளி (Eyespot)",
        summary: "மஞ்சள் வளையத்துடன் கூடிய வெளிர் பச்சை வட்ட வடுக்கள் தோன்றும்.",
    },
    GuideEntry {
        id: "d5",
        name: "தார் புள்ளி (Tar Spot)",
        summary: "தேய்த்து அகற்ற முடியாத உயர்ந்த கருப்பு புள்ளிகள். குளிர்ந்த ஈரமான சூழலில் பரவும்.",
    },
];

static TA_PESTS: &[GuideEntry] = &[
    GuideEntry {
        id: "p1",
        name: "வேர் புழு",
        summary: "• அடையாளம்: ஜூன்/ஜூலை மாதங்களில் வேர்களை உண்ணும். செடிகள் சாய்வதற்கு இது காரணமாகிறது.",
    },
    GuideEntry {
        id: "p2",
        name: "கருப்பு வெட்டுப்புழு",
        summary: "• அடையாளம்: இளம் செடிகளை வெட்டி 'Dead Heart' நிலையை உண்டாக்கும்.",
    },
    GuideEntry {
        id: "p3",
        name: "சேனா படைப்புழு",
        summary: "• அடையாளம்: இலைகளில் துளைகளையும் கிழிந்த ஓரங்களையும் உண்டாக்கும்.",
    },
    GuideEntry {
        id: "p4",
        name: "கதிர் புழு",
        summary: "• அடையாளம்: கதிரின் நுனியில் இருந்து உண்ணத் தொடங்குகிறது.",
    },
    GuideEntry {
        id: "p5",
        name: "பீன் வெட்டுப்புழு",
        summary: "• அடையாளம்: கதிர் மற்றும் தானியங்களை உண்ணும்.",
    },
];

static TA_TIPS: &[TipsSection] = &[
    TipsSection {
        title: "1. நடுதல் மற்றும் ஆரம்ப நிலை (0-4 வாரங்கள்)",
        tips: &[
            "ஆழம்: விதைகளை 1-2 அங்குல ஆழத்தில் நடவும்.",
            "மறுநடவு: 7-10 நாட்களுக்குள் காலியாக உள்ள இடங்களில் நடவும்.",
        ],
    },
    TipsSection {
        title: "2. வளர்ச்சி நிலை (5-10 வாரங்கள்)",
        tips: &[
            "உரம்: 4 மற்றும் 8 வது வாரங்களில் யூரியா இடவும்.",
            "நீர்: பூக்கும் மற்றும் கதிர் வரும் காலத்தில் நீர் அவசியம்.",
        ],
    },
    TipsSection {
        title: "3. அறுவடை (12+ வாரங்கள்)",
        tips: &[
            "அறுவடை: தானியங்கள் கடினமானதும் அறுவடை செய்யவும்.",
            "சேமிப்பு: நன்கு உலர்த்தி சேமிக்கவும்.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const LANGUAGES: [Language; 3] = [Language::En, Language::Si, Language::Ta];

    #[test]
    fn test_guide_shape_matches_across_languages() {
        for language in LANGUAGES {
            assert_eq!(disease_guide(language).len(), 5, "diseases in {language}");
            assert_eq!(pest_guide(language).len(), 5, "pests in {language}");
            assert_eq!(growing_tips(language).len(), 3, "tip stages in {language}");
        }
    }

    #[test]
    fn test_card_ids_are_unique_within_a_language() {
        for language in LANGUAGES {
            let mut ids: Vec<&str> = disease_guide(language)
                .iter()
                .chain(pest_guide(language))
                .map(|entry| entry.id)
                .collect();
            let total = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), total, "duplicate card id in {language}");
        }
    }

    #[test]
    fn test_every_tips_section_has_tips() {
        for language in LANGUAGES {
            for section in growing_tips(language) {
                assert!(!section.tips.is_empty(), "empty section in {language}");
            }
        }
    }
}
