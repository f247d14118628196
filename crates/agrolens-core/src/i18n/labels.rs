//! Compiled-in translation tables.

pub(super) const TABLES: &[(&str, &[(&str, &str)])] = &[("en", EN), ("te", TE), ("hi", HI)];

const EN: &[(&str, &str)] = &[
    // --- Navigation ---
    ("app_name", "AgroLens"),
    ("tagline", "Smart Farming Assistant for Telangana"),
    ("home", "Home"),
    ("mandi_prices", "Mandi Prices"),
    ("weather", "Weather"),
    ("tips", "Tips & News"),
    ("schemes", "Schemes"),
    ("crop_scanner", "Crop Scanner"),
    ("marketplace", "Marketplace"),
    ("seasonal_crops", "Seasonal Crops"),
    ("soil_analysis", "Soil Analysis"),
    ("welcome", "Welcome to AgroLens"),
    ("subtitle", "Your smart farming companion for better yields and profits"),
    // --- Scanner / soil ---
    ("scanning", "Analyzing crop image..."),
    ("analyzing_soil", "Analyzing soil sample..."),
    ("camera_denied", "Camera access denied or not available"),
    ("microphone_denied", "Microphone access denied or not available"),
    ("crop_health", "Crop Health"),
    ("confidence", "Confidence"),
    ("severity", "Severity"),
    ("diagnosis", "Diagnosis"),
    ("recommendations", "Recommendations"),
    ("soil_type", "Soil Type"),
    ("ph_level", "pH Level"),
    ("ph_acidic", "Acidic"),
    ("ph_neutral", "Neutral"),
    ("ph_alkaline", "Alkaline"),
    ("organic_matter", "Organic Matter"),
    ("nitrogen", "Nitrogen"),
    ("phosphorus", "Phosphorus"),
    ("potassium", "Potassium"),
    ("suitable_crops", "Suitable Crops"),
    ("fertilizers", "Fertilizers"),
    // --- Chat ---
    ("chat_title", "Voice Assistant"),
    ("you", "You"),
    ("assistant", "AgroLens"),
];

const TE: &[(&str, &str)] = &[
    ("app_name", "అగ్రోలెన్స్"),
    ("tagline", "తెలంగాణకు స్మార్ట్ వ్యవసాయ సహాయకుడు"),
    ("home", "హోమ్"),
    ("mandi_prices", "మార్కెట్ ధరలు"),
    ("weather", "వాతావరణం"),
    ("tips", "చిట్కాలు & వార్తలు"),
    ("schemes", "పథకాలు"),
    ("crop_scanner", "పంట స్కానర్"),
    ("marketplace", "మార్కెట్‌ప్లేస్"),
    ("seasonal_crops", "కాలానుగుణ పంటలు"),
    ("soil_analysis", "నేల విశ్లేషణ"),
    ("welcome", "అగ్రోలెన్స్‌కు స్వాగతం"),
    ("subtitle", "మెరుగైన దిగుబడి మరియు లాభాల కోసం మీ స్మార్ట్ వ్యవసాయ సహచరుడు"),
];

const HI: &[(&str, &str)] = &[
    ("app_name", "एग्रोलेंस"),
    ("tagline", "तेलंगाना के लिए स्मार्ट कृषि सहायक"),
    ("home", "होम"),
    ("mandi_prices", "मंडी भाव"),
    ("weather", "मौसम"),
    ("tips", "टिप्स और न्यूज़"),
    ("schemes", "योजनाएं"),
    ("crop_scanner", "फसल स्कैनर"),
    ("marketplace", "मार्केटप्लेस"),
    ("seasonal_crops", "मौसमी फसलें"),
    ("soil_analysis", "मिट्टी विश्लेषण"),
    ("welcome", "एग्रोलेंस में आपका स्वागत है"),
    ("subtitle", "बेहतर उत्पादन और मुनाफे के लिए आपका स्मार्ट कृषि साथी"),
];
