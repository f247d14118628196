//! Static keyword data for the farming assistant.
//!
//! Each topic has one English and one Telugu trigger phrase sharing the same
//! replies. Replies are keyed by short language code.

/// Trigger phrases in match order, each with its localized replies.
pub(crate) const TRIGGERS: &[(&str, &[(&str, &str)])] = &[
    ("monsoon crops", MONSOON_CROPS),
    ("summer crops", SUMMER_CROPS),
    ("winter crops", WINTER_CROPS),
    ("best fertilizer", BEST_FERTILIZER),
    ("organic farming", ORGANIC_FARMING),
    ("pesticide use", PESTICIDE_USE),
    ("soil testing", SOIL_TESTING),
    ("irrigation methods", IRRIGATION_METHODS),
    ("crop rotation", CROP_ROTATION),
    ("natural pest control", NATURAL_PEST_CONTROL),
    ("telangana crops", TELANGANA_CROPS),
    ("black soil crops", BLACK_SOIL_CROPS),
    ("compost preparation", COMPOST_PREPARATION),
    ("tomato fertilizer", TOMATO_FERTILIZER),
    ("weed control", WEED_CONTROL),
    // te
    ("మాన్సూన్ పంటలు", MONSOON_CROPS),
    ("గ్రీష్మకాల పంటలు", SUMMER_CROPS),
    ("చలికాల పంటలు", WINTER_CROPS),
    ("ఉత్తమ ఎరువు", BEST_FERTILIZER),
    ("సేంద్రీయ వ్యవసాయం", ORGANIC_FARMING),
    ("పురుగు మందుల వాడకం", PESTICIDE_USE),
    ("మట్టి పరీక్ష", SOIL_TESTING),
    ("పారిశ్రామిక పద్ధతులు", IRRIGATION_METHODS),
    ("పంటల మార్పిడి", CROP_ROTATION),
    ("సహజ పురుగు నియంత్రణ", NATURAL_PEST_CONTROL),
    ("తెలంగాణ పంటలు", TELANGANA_CROPS),
    ("నల్ల మట్టి పంటలు", BLACK_SOIL_CROPS),
    ("కంపోస్ట్ తయారీ", COMPOST_PREPARATION),
    ("టమోటా ఎరువు", TOMATO_FERTILIZER),
    ("కలుపు నియంత్రణ", WEED_CONTROL),
];

/// Reply when no trigger matches. English comes from a hardcoded fallback.
pub(crate) const UNRECOGNIZED: &[(&str, &str)] = &[
    ("hi", "माफ़ कीजिए, मैं अभी सीख रहा हूँ। कृपया खेती या फसल से जुड़ा प्रश्न पूछें!"),
    ("te", "క్షమించండి, నేను ఇంకా నేర్చుకుంటున్నాను. దయచేసి వ్యవసాయం లేదా పంటల గురించి అడగండి!"),
    ("ta", "மன்னிக்கவும், நான் இன்னும் கற்றுக்கொண்டு வருகிறேன். விவசாயம் அல்லது பயிர்கள் குறித்து கேளுங்கள்!"),
    ("mr", "माफ करा, मी अजून शिकत आहे. कृपया शेती किंवा पिकांबद्दल प्रश्न विचारा!"),
];

pub(crate) const UNRECOGNIZED_FALLBACK: &str = "Sorry, I am still learning. Please ask about farming, crops, or pesticides!";

pub(crate) const GREETINGS: &[(&str, &str)] = &[
    ("hi", "नमस्ते! मैं आपकी कैसे मदद कर सकती हूँ?"),
    ("te", "హలో! నేను మీకు ఎలా సహాయపడగలను?"),
    ("ta", "வணக்கம்! நான் உங்களுக்கு எப்படி உதவலாம்?"),
    ("mr", "नमस्कार! मी तुम्हाला कशाप्रकारे मदत करू शकतो?"),
];

pub(crate) const GREETING_FALLBACK: &str = "Hello! How can I help you?";

const MONSOON_CROPS: &[(&str, &str)] = &[
    ("en", "In monsoon, crops like rice, maize, and soybean are commonly grown."),
    ("hi", "मानसून के मौसम में धान, मक्का, सोयाबीन जैसी फसलें उगाई जाती हैं।"),
    ("te", "మాన్సూన్ కాలంలో వరి, మక్కజొన్న, సోయాబీన్ పంటలు సాగు చేయవచ్చు."),
    ("ta", "மழைக்காலத்தில் அரிசி, மக்காச்சோளம் மற்றும் சோயா போன்ற பயிர்கள் வளர்க்கப்படுகின்றன."),
    ("mr", "मान्सूनमध्ये भात, मका आणि सोयाबीन यासारखी पिके घेतली जातात."),
];

const SUMMER_CROPS: &[(&str, &str)] = &[
    ("en", "Summer crops include maize, millets, and pulses. Ensure good irrigation."),
    ("hi", "गर्मी में मक्का, बाजरा और दालें उगाई जाती हैं। सिंचाई का ध्यान रखें।"),
    ("te", "గ్రీష్మకాలంలో మక్కజొన్న, బాజ్రా మరియు పప్పుదినుసులు సాగు చేయబడతాయి."),
    ("ta", "வெயில் பருவத்தில் மக்காச்சோளம், கம்பு மற்றும் பருப்பு பயிர்கள் வளர்க்கப்படுகின்றன."),
    ("mr", "उन्हाळ्यात मका, ज्वारी आणि डाळीची पिके घेतली जातात."),
];

const WINTER_CROPS: &[(&str, &str)] = &[
    ("en", "Winter (Rabi) crops include wheat, barley, mustard, and peas."),
    ("hi", "सर्दियों में गेहूं, जौ, सरसों और मटर जैसी रबी फसलें बोई जाती हैं।"),
    ("te", "చలికాలంలో గోధుమ, బార్లీ, ఆవాలు మరియు బటానీ పంటలు సాగు చేస్తారు."),
    ("ta", "குளிர்காலத்தில் கோதுமை, பர்லி, கடுகு மற்றும் பட்டாணி போன்ற பயிர்கள் வளர்க்கப்படுகின்றன."),
    ("mr", "हिवाळ्यात गहू, बार्ली, मोहरी आणि वाटाणा पिके घेतली जातात."),
];

const BEST_FERTILIZER: &[(&str, &str)] = &[
    ("en", "Use NPK fertilizer based on soil test. Organic compost is also good."),
    ("hi", "मिट्टी की जांच के आधार पर एनपीके उर्वरक का प्रयोग करें। जैविक खाद भी लाभकारी है।"),
    ("te", "మట్టిలో పోషకాలు తెలుసుకొని NPK ఎరువులు వాడండి. జీవ ఎరువులు కూడా మంచివి."),
    ("ta", "மண்ணின் நிலையைப் பார்த்து NPK உரங்களைப் பயன்படுத்தவும். இயற்கை உரமும் நல்லது."),
    ("mr", "माती तपासून NPK खत वापरा. सेंद्रिय खतसुद्धा उपयुक्त आहे."),
];

const ORGANIC_FARMING: &[(&str, &str)] = &[
    ("en", "Organic farming avoids chemicals, using compost and natural pest control."),
    ("hi", "जैविक खेती में रासायनिक खाद और कीटनाशकों से बचा जाता है, और कंपोस्ट व प्राकृतिक तरीकों से खेती होती है।"),
    ("te", "ఆర్గానిక్ వ్యవసాయం అంటే రసాయనాలను వాడకుండా జీవ ఎరువులు, సహజ నివారణలు వాడడం."),
    ("ta", "இயற்கை விவசாயம் என்பது ரசாயனங்களை தவிர்த்து இயற்கை உரங்கள் மற்றும் பாதுகாப்புகளை பயன்படுத்துவது."),
    ("mr", "सेंद्रिय शेती म्हणजे रसायनांपासून मुक्त, सेंद्रिय खत आणि नैसर्गिक कीडनियंत्रण वापरणे."),
];

const PESTICIDE_USE: &[(&str, &str)] = &[
    ("en", "Use neem oil or bio-pesticides. Consult experts for chemical alternatives."),
    ("hi", "नीम का तेल या जैविक कीटनाशक का प्रयोग करें। रासायनिक विकल्प के लिए विशेषज्ञ की सलाह लें।"),
    ("te", "వేప నూనె లేదా బయోపెస్టిసైడ్లు వాడండి. అవసరమైతే నిపుణుల సలహా తీసుకోండి."),
    ("ta", "வேப்பெண்ணெய் அல்லது உயிரி பூச்சிக்கொல்லிகளை பயன்படுத்தவும். தேவையெனில் நிபுணர்களிடம் ஆலோசனை பெறவும்."),
    ("mr", "नीम तेल किंवा जैविक कीटकनाशक वापरा. रासायनिक पर्यायासाठी तज्ज्ञ सल्ला घ्या."),
];

const SOIL_TESTING: &[(&str, &str)] = &[
    ("en", "Soil testing helps determine nutrient levels for better crop planning."),
    ("hi", "मिट्टी की जांच से पोषक तत्वों का स्तर पता चलता है जिससे फसल योजना बेहतर बनती है।"),
    ("te", "మట్టి పరీక్షతో పోషకాల స్థాయిలు తెలుసుకోగలుగుతారు, ఇది పంటల నిర్వహణకు ఉపయోగపడుతుంది."),
    ("ta", "மண்ணின் சோதனை மூலம் அதில் உள்ள ஊட்டச்சத்துக்களின் அளவை அறிந்து பயிர்ச்செய்கையில் உதவுகிறது."),
    ("mr", "माती चाचणीमुळे पोषणतत्त्वांची माहिती मिळते आणि फसल नियोजन सुधारते."),
];

const IRRIGATION_METHODS: &[(&str, &str)] = &[
    ("en", "Drip and sprinkler irrigation save water and improve yield."),
    ("hi", "ड्रिप और स्प्रिंकलर सिंचाई पानी बचाते हैं और उपज बढ़ाते हैं।"),
    ("te", "డ్రిప్ మరియు స్ప్రింక్లర్ విధానాలు నీటిని ఆదా చేస్తాయి మరియు దిగుబడి పెంచుతాయి."),
    ("ta", "டிரிப் மற்றும் ஸ்பிரிங்கிளர் நீர்ப்பாசனம் நீரைச் சேமித்து விளைச்சலை அதிகரிக்கின்றன."),
    ("mr", "ड्रीप व स्प्रिंकलर सिंचनाने पाणी वाचते आणि उत्पादन वाढते."),
];

const CROP_ROTATION: &[(&str, &str)] = &[
    ("en", "Crop rotation improves soil and reduces pests. Rotate legumes and grains."),
    ("hi", "फसल चक्र मिट्टी को बेहतर बनाता है और कीटों को कम करता है। दलहनों और अनाज को बदल-बदल कर बोएं।"),
    ("te", "పంటల మార్పిడి మట్టిని మెరుగుపరిచి, తెగుళ్ల ప్రభావాన్ని తగ్గిస్తుంది."),
    ("ta", "பயிர் மாற்றம் மண்ணின் தரத்தை மேம்படுத்தி, பூச்சிகளை குறைக்க உதவுகிறது."),
    ("mr", "पिकांची फेरफार जमिनीची गुणवत्ता सुधारते आणि कीड कमी करते."),
];

const NATURAL_PEST_CONTROL: &[(&str, &str)] = &[
    ("en", "Use neem oil, traps, and natural predators for safe pest control."),
    ("hi", "नीम का तेल, ट्रैप और प्राकृतिक कीट भक्षकों का प्रयोग करें।"),
    ("te", "వేప నూనె, ట్రాప్స్ మరియు సహజ శత్రువులను వాడండి."),
    ("ta", "வேப்பெண்ணெய், கண்ணிகள் மற்றும் இயற்கை எதிரிகளைக் கொண்டு பூச்சிகளை கட்டுப்படுத்தலாம்."),
    ("mr", "नीम तेल, सापळे व नैसर्गिक शत्रूंचा वापर करावा."),
];

const TELANGANA_CROPS: &[(&str, &str)] = &[
    ("en", "Major crops in Telangana are rice, cotton, maize, and red gram."),
    ("hi", "तेलंगाना में मुख्य फसलें हैं - धान, कपास, मक्का और अरहर।"),
    ("te", "తెలంగాణలో ముఖ్యమైన పంటలు వరి, పత్తి, మక్కజొన్న మరియు కందులు."),
    ("ta", "தெலுங்கானாவில் முக்கியமான பயிர்கள் அரிசி, பருத்தி, மக்காச்சோளம் மற்றும் தொட்டைக்கடலை."),
    ("mr", "तेलंगणामध्ये भात, कापूस, मका व तूर ही प्रमुख पिके आहेत."),
];

const BLACK_SOIL_CROPS: &[(&str, &str)] = &[
    ("en", "Black soil is ideal for cotton, soybean, and sorghum."),
    ("hi", "काली मिट्टी कपास, सोयाबीन और ज्वार के लिए उपयुक्त है।"),
    ("te", "నల్ల మట్టి పత్తి, సోయాబీన్, జొన్నలకు అనుకూలంగా ఉంటుంది."),
    ("ta", "கருப்பு மண் பருத்தி, சோயா மற்றும் சோளம் போன்ற பயிர்களுக்கு ஏற்றது."),
    ("mr", "काळी माती कापूस, सोयाबीन आणि ज्वारीसाठी योग्य आहे."),
];

const COMPOST_PREPARATION: &[(&str, &str)] = &[
    ("en", "Use kitchen waste, dry leaves, and cow dung to prepare compost."),
    ("hi", "किचन वेस्ट, सूखी पत्तियां और गोबर से कंपोस्ट तैयार करें।"),
    ("te", "వంటింటి మాలినాలు, ఎండిన ఆకులు, ఎద్దుల పొదిని వాడి కంపోస్ట్ తయారు చేయండి."),
    ("ta", "அடுப்பும்ஒரங்குப்பழங்கள், உலர்ந்த இலைகள் மற்றும் மாட்டுப்பழிவைப் பயன்படுத்தி எளிய உரம் தயாரிக்கலாம்."),
    ("mr", "स्वयंपाकघरातील कचरा, सुकलेली पाने आणि शेणखत वापरून कंपोस्ट तयार करा."),
];

const TOMATO_FERTILIZER: &[(&str, &str)] = &[
    ("en", "Use nitrogen early and potassium during flowering for tomatoes."),
    ("hi", "टमाटर में शुरुआत में नाइट्रोजन और फल बनने पर पोटेशियम का प्रयोग करें।"),
    ("te", "టమోటా ప్రారంభంలో నైట్రోజన్, పుష్పించేటప్పుడు పొటాషియం ఇవ్వాలి."),
    ("ta", "தக்காளிக்காக ஆரம்பத்தில் நைட்ரஜன் மற்றும் மலர்ச்சிக்குப்பின் பொட்டாசியம் தேவை."),
    ("mr", "टोमॅटोसाठी सुरुवातीला नायट्रोजन आणि फुलांनंतर पोटॅशियम द्या."),
];

const WEED_CONTROL: &[(&str, &str)] = &[
    ("en", "Weeds can be controlled with mulching, hand weeding, or herbicides."),
    ("hi", "घास-पात को मल्चिंग, हाथ से निकालना या खरपतवारनाशी से नियंत्रित किया जा सकता है।"),
    ("te", "గడ్డి పెరగకుండా మల్చింగ్, చేతితో తీయడం లేదా హెర్బిసైడ్లు వాడాలి."),
    ("ta", "புல்லிகளை கட்டுப்படுத்த மல்ச்சிங், கையால் நீக்கம் அல்லது பூச்சிக்கொல்லிகள் பயன்படுத்தலாம்."),
    ("mr", "गवत नियंत्रणासाठी मल्चिंग, हाताने काढणे किंवा रसायन वापरले जाते."),
];
