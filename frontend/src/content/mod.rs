pub mod guide;
pub mod ui;

use shared::{DiseaseLabel, Language};

/// Localized agronomic reference for one disease category.
pub struct DiseaseInfo {
    pub description: &'static str,
    pub symptoms: &'static str,
    pub conditions: &'static str,
    pub pathogen: &'static str,
    pub management: &'static str,
}

/// Static language- and label-indexed lookup. A miss renders as the
/// localized "details not found" message, never a crash.
pub fn disease_info(language: Language, label: DiseaseLabel) -> Option<&'static DiseaseInfo> {
    let table = match language {
        Language::En => EN,
        Language::Si => SI,
        Language::Ta => TA,
    };
    table
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, info)| info)
}

static EN: &[(DiseaseLabel, DiseaseInfo)] = &[
    (
        DiseaseLabel::Blight,
        DiseaseInfo {
            description: "Northern corn leaf blight occurs commonly in most areas where corn is grown. Yield losses are typically minimal, but can become significant with susceptible hybrids or inbreds if infected before silking.",
            symptoms: "* Canoe-shaped lesions 1 inch to 6 inches long.\n* Initially bordered by gray-green margins, eventually turning tan.\n* May contain dark areas of fungal sporulation.\n* Lesions begin on lower leaves and spread to upper leaves.\n* Can be confused with Goss's leaf blight or Stewart's wilt.",
            conditions: "* Moderate temperatures (64 to 80 °F).\n* Prolonged periods of moisture.\n* Typically appears at or after silking.",
            pathogen: "Exserohilum turcicum (syn. Helminthosporium turcicum). Overwinters on corn leaf debris.",
            management: "* Use resistant hybrids.\n* Fungicides for seed production inbreds.\n* Crop rotation and tillage practices.",
        },
    ),
    (
        DiseaseLabel::CommonRust,
        DiseaseInfo {
            description: "Frequently occurs in mid to later summer. It rarely reaches levels that cause yield loss in commercial hybrids but is most problematic during cool, wet weather.",
            symptoms: "* Rust-colored to dark brown, elongated pustules on both leaf surfaces.\n* Pustules contain cinnamon brown urediniospores.\n* Pustules darken as they age.\n* Severe conditions may cause leaf chlorosis and death.\n* Differentiated from Southern rust by pustules on both top and bottom leaf surfaces.",
            conditions: "* Cool temperatures (60 - 76 °F).\n* Heavy dews, ~6 hours of leaf wetness, and relative humidity > 95%.\n* Temperatures above 80 °F suppress development.",
            pathogen: "Puccinia sorghi. Overwinters in southern U.S. and Mexico; spores blown north in summer.",
            management: "* Best practice is to use resistant corn hybrids.\n* Fungicides are beneficial if applied early.",
        },
    ),
    (
        DiseaseLabel::GrayLeafSpot,
        DiseaseInfo {
            description: "Typically the most serious foliar disease of corn. Requires extended periods of high humidity and warm conditions.",
            symptoms: "* Small, necrotic spots with halos initially.\n* Expands to rectangular lesions (1/8 inch wide by 2-3 inches long).\n* Gray to brown appearance with distinct parallel edges.\n* Appear opaque when held up to light.\n* Lesions are usually limited on the sides by veins.",
            conditions: "* Moderate to warm temperatures.\n* Extended periods (>24 hr) of high humidity (>95%) or wet weather.\n* Problematic in minimum tillage and corn-on-corn rotations.",
            pathogen: "Cercospora zeae-maydis. Overwinters in debris on the soil surface.",
            management: "* Use resistant corn hybrids.\n* Conventional tillage where appropriate.\n* Crop rotation.\n* Foliar fungicides if economically warranted.",
        },
    ),
    (
        DiseaseLabel::Healthy,
        DiseaseInfo {
            description: "The plant is in optimal condition.",
            symptoms: "Green vibrant leaves, no spots.",
            conditions: "Balanced nutrients and proper water.",
            pathogen: "None",
            management: "Continue organic fertilization and monitoring.",
        },
    ),
];

static SI: &[(DiseaseLabel, DiseaseInfo)] = &[
    (
        DiseaseLabel::Blight,
        DiseaseInfo {
            description: "බඩඉරිඟු වගා කරන බොහෝ ප්‍රදේශවල බහුලව දක්නට ලැබේ. සාමාන්‍යයෙන් අස්වනු හානිය අවම වුවද, කරල් මතුවීමට පෙර ආසාදනය වුවහොත් සැලකිය යුතු හානියක් විය හැක.",
            symptoms: "* අඟල් 1 සිට 6 දක්වා දිගැති ඔරු හැඩැති ලප.\n* මුලින් අළු-කොළ පැහැති වන අතර පසුව තැඹිලි/දුඹුරු පැහැයට හැරේ.\n* ලප පහළ පත්‍රවලින් ආරම්භ වී ඉහළට පැතිරෙයි.\n* මෙය Goss's blight හෝ Stewart's wilt සමඟ පටලවා ගත හැක.",
            conditions: "* මධ්‍යස්ථ උෂ්ණත්වය (64 - 80 °F).\n* දිගුකාලීන තෙතමනය සහිත කාලගුණය.\n* සාමාන්‍යයෙන් කරල් මතුවන කාලයේදී හෝ පසුව ඇතිවේ.",
            pathogen: "Exserohilum turcicum දිලීරය. බෝග අවශේෂ මත ජීවත් වේ.",
            management: "* ප්‍රතිරෝධී ප්‍රභේද භාවිතා කරන්න.\n* අවශ්‍ය විට දිලීර නාශක යොදන්න.\n* බෝග මාරුව සහ පස පෙරලීම සිදු කරන්න.",
        },
    ),
    (
        DiseaseLabel::CommonRust,
        DiseaseInfo {
            description: "මධ්‍යම හෝ පසුගිය ග්‍රීෂ්ම කාලයේ බහුලව ඇතිවේ. වාණිජ බෝග වලට විශාල හානියක් නොකළද, සිසිල් සහ තෙත් කාලගුණයේදී රෝගය දරුණු විය හැක.",
            symptoms: "* පත්‍රයේ දෙපසම මලකඩ පැහැති හෝ තද දුඹුරු දිගටි බිබිලි ඇතිවේ.\n* බිබිලි වයසට යත්ම තද පැහැ වේ.\n* දැඩි අවස්ථාවලදී කොළ කහ පැහැ වී මිය යා හැක.\n* දකුණු මලකඩ (Southern rust) රෝගයෙන් වෙන්කර හඳුනාගත හැක්කේ පත්‍රයේ දෙපසම බිබිලි තිබීමෙනි.",
            conditions: "* සිසිල් උෂ්ණත්වය (60 - 76 °F).\n* අධික පිනි, පැය 6කට වඩා පත්‍ර තෙත්ව පැවතීම සහ 95% ට වැඩි ආර්ද්‍රතාවය.\n* 80 °F ට වැඩි උෂ්ණත්වයකදී රෝගය පැතිරීම අඩුවේ.",
            pathogen: "Puccinia sorghi දිලීරය. සුළඟ මගින් බීජාණු පැතිරෙයි.",
            management: "* හොඳම ක්‍රමය ප්‍රතිරෝධී බීජ භාවිතා කිරීමයි.\n* මුල් අවස්ථාවේදී දිලීර නාශක භාවිතා කිරීම සාර්ථක වේ.",
        },
    ),
    (
        DiseaseLabel::GrayLeafSpot,
        DiseaseInfo {
            description: "බඩඉරිඟු වගාවේ ඇතිවන දරුණුතම පත්‍ර රෝගයයි. අධික ආර්ද්‍රතාවය සහ උණුසුම් තත්ත්වයන් මෙයට අවශ්‍ය වේ.",
            symptoms: "* මුලින්ම කුඩා තිත් ලෙස හටගනී.\n* පසුව අඟල් 2-3ක් දිගැති සෘජුකෝණාස්‍රාකාර අළු හෝ දුඹුරු ලප බවට පත්වේ.\n* ලප වල දාර සමාන්තරව පිහිටයි.\n* ලප පත්‍රයේ නහර (veins) වලට සීමා වී පවතී.",
            conditions: "* උණුසුම් උෂ්ණත්වය.\n* පැය 24කට වඩා වැඩි කාලයක් පවතින අධික ආර්ද්‍රතාවය (>95%).\n* එකම බිමේ දිගින් දිගටම බඩඉරිඟු වගා කරන විට රෝගය වැඩිවේ.",
            pathogen: "Cercospora zeae-maydis දිලීරය. පස මතුපිට ඇති බෝග අවශේෂ වල ජීවත් වේ.",
            management: "* ප්‍රතිරෝධී ප්‍රභේද භාවිතා කරන්න.\n* බෝග මාරුව සිදු කරන්න.\n* ආර්ථික වශයෙන් වාසිදායක නම් දිලීර නාශක යොදන්න.",
        },
    ),
    (
        DiseaseLabel::Healthy,
        DiseaseInfo {
            description: "බෝගය නිරෝගී මට්ටමේ පවතී.",
            symptoms: "පැහැපත් තද කොළ පැහැති පත්‍ර.",
            conditions: "නිසි පෝෂණය සහ ජලය.",
            pathogen: "නැත",
            management: "කාබනික පොහොර යෙදීම දිගටම කරගෙන යන්න.",
        },
    ),
];

static TA: &[(DiseaseLabel, DiseaseInfo)] = &[
    (
        DiseaseLabel::Blight,
        DiseaseInfo {
            description: "மக்காச்சோளம் வளர்க்கப்படும் பெரும்பாலான பகுதிகளில் இது பொதுவாகக் காணப்படுகிறது. மகசூல் இழப்பு பொதுவாகக் குறைவாக இருந்தாலும், சில ரகங்களில் பாதிப்பு அதிகமாக இருக்கலாம்.",
            symptoms: "* 1 முதல் 6 அங்குல நீளமான படகு வடிவ வடுக்கள்.\n* ஆரம்பத்தில் சாம்பல்-பச்சை நிறமாகவும், பின்னர் பழுப்பு நிறமாகவும் மாறும்.\n* வடுக்கள் கீழ் இலைகளில் தொடங்கி மேல் இலைகளுக்குப் பரவும்.",
            conditions: "* மிதமான வெப்பநிலை (64 - 80 °F).\n* நீண்ட கால ஈரப்பதம்.\n* பொதுவாக பூக்கும் காலத்தில் அல்லது அதற்குப் பிறகு தோன்றும்.",
            pathogen: "Exserohilum turcicum பூஞ்சை. பயிர் எச்சங்களில் உயிர்வாழும்.",
            management: "* எதிர்ப்பு ரகங்களை பயிரிடவும்.\n* பயிர் சுழற்சி முறையைப் பின்பற்றவும்.\n* தேவையான போது பூஞ்சைக் கொல்லிகளைப் பயன்படுத்தவும்.",
        },
    ),
    (
        DiseaseLabel::CommonRust,
        DiseaseInfo {
            description: "மத்திய அல்லது பிற்பகுதி கோடை காலத்தில் இது அடிக்கடி நிகழ்கிறது. குளிர்ந்த மற்றும் ஈரமான காலநிலையில்தான் இது அதிக பாதிப்பை ஏற்படுத்துகிறது.",
            symptoms: "* இலையின் இரு பக்கங்களிலும் துரு நிற அல்லது கரும் பழுப்பு நிற கொப்புளங்கள்.\n* கொப்புளங்களில் இலவங்கப்பட்டை பழுப்பு நிற வித்திகள் இருக்கும்.\n* கடுமையான நிலையில் இலைகள் மஞ்சள் நிறமாகி காய்ந்துவிடும்.",
            conditions: "* குளிர்ந்த வெப்பநிலை (60 - 76 °F).\n* அதிக பனி மற்றும் 95% க்கும் அதிகமான ஈரப்பதம்.\n* 80 °F க்கு மேல் வெப்பநிலை இருந்தால் நோய் பரவல் குறையும்.",
            pathogen: "Puccinia sorghi பூஞ்சை. காற்று மூலம் வித்திகள் பரவுகின்றன.",
            management: "* எதிர்ப்பு ரக மக்காச்சோளத்தை பயன்படுத்துவதே சிறந்தது.\n* ஆரம்ப கட்டத்தில் பூஞ்சைக் கொல்லிகளைப் பயன்படுத்துவது பலன் தரும்.",
        },
    ),
    (
        DiseaseLabel::GrayLeafSpot,
        DiseaseInfo {
            description: "மக்காச்சோளத்தின் மிகக் கடுமையான இலை நோயாகும். இதற்கு அதிக ஈரப்பதம் மற்றும் வெப்பமான சூழல் தேவை.",
            symptoms: "* முதலில் சிறிய புள்ளிகளாகத் தோன்றும்.\n* பின்னர் செவ்வக வடிவ சாம்பல் அல்லது பழுப்பு நிற வடுக்களாக (2-3 அங்குல நீளம்) மாறும்.\n* வடுக்கள் இலையின் நரம்புகளுக்குள் மட்டுப்படுத்தப்பட்டிருக்கும்.",
            conditions: "* வெப்பமான சூழல்.\n* 24 மணி நேரத்திற்கும் மேலாக நீடிக்கும் அதிக ஈரப்பதம் (>95%).\n* ஒரே நிலத்தில் தொடர்ந்து மக்காச்சோளம் பயிரிடுவதால் பாதிப்பு கூடும்.",
            pathogen: "Cercospora zeae-maydis பூஞ்சை. மண் மேற்பரப்பில் உள்ள எச்சங்களில் வாழும்.",
            management: "* எதிர்ப்பு ரகங்களை பயன்படுத்தவும்.\n* பயிர் சுழற்சியைப் பின்பற்றவும்.\n* பொருளாதார ரீதியாக சாத்தியமெனில் பூஞ்சைக் கொல்லிகளைத் தெளிக்கவும்.",
        },
    ),
    (
        DiseaseLabel::Healthy,
        DiseaseInfo {
            description: "பயிர் ஆரோக்கியமான நிலையில் உள்ளது.",
            symptoms: "பச்சை நிற இலைகள், புள்ளிகள் இல்லை.",
            conditions: "சரியான நீர் மற்றும் சத்துக்கள்.",
            pathogen: "இல்லை",
            management: "இயற்கை உரங்களை தொடர்ந்து பயன்படுத்தவும்.",
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    const LANGUAGES: [Language; 3] = [Language::En, Language::Si, Language::Ta];
    const LABELS: [DiseaseLabel; 4] = [
        DiseaseLabel::Blight,
        DiseaseLabel::CommonRust,
        DiseaseLabel::GrayLeafSpot,
        DiseaseLabel::Healthy,
    ];

    // Every canonical label must resolve in every language; the "details not
    // found" path only exists for future table drift.
    #[test]
    fn test_every_label_resolves_in_every_language() {
        for language in LANGUAGES {
            for label in LABELS {
                let info = disease_info(language, label);
                assert!(info.is_some(), "missing entry for {label} in {language}");
            }
        }
    }

    #[test]
    fn test_entries_are_non_empty() {
        for language in LANGUAGES {
            for label in LABELS {
                let info = disease_info(language, label).unwrap();
                assert!(!info.description.is_empty());
                assert!(!info.symptoms.is_empty());
                assert!(!info.conditions.is_empty());
                assert!(!info.pathogen.is_empty());
                assert!(!info.management.is_empty());
            }
        }
    }
}
