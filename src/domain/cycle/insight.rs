//! Daily insight text for each phase, per supported language.

use super::Phase;
use crate::domain::profile::Language;

/// Heading shown above the daily insight.
pub fn insight_title(language: Language) -> &'static str {
    match language {
        Language::English => "Today's Insight",
        Language::Hindi => "आज का सुझाव",
        Language::Telugu => "ఈ రోజు సలహా",
        Language::Tamil => "இன்றைய குறிப்பு",
        Language::Kannada => "ಇಂದಿನ ಸಲಹೆ",
    }
}

/// Tip for the given phase in the user's language.
pub fn insight_for(phase: Phase, language: Language) -> &'static str {
    use Language::*;
    use Phase::*;

    match (language, phase) {
        (English, Menstrual) => "Iron levels drop now. Eat palak (spinach) and gud (jaggery). Rest well! 🛌",
        (English, Follicular) => "Energy rising! Great time for light exercise like yoga or a brisk walk. 🧘‍♀️",
        (English, Ovulation) => "You might feel more social. Stay hydrated with 8 glasses of water! 💧",
        (English, Luteal) => "PMS might start. Avoid salty snacks to reduce bloating. Eat cucumber! 🥒",

        (Hindi, Menstrual) => "आयरन का स्तर कम हो सकता है। पालक और गुड़ खाएं। आराम करें! 🛌",
        (Hindi, Follicular) => "ऊर्जा बढ़ रही है! योग या हल्की सैर के लिए अच्छा समय है। 🧘‍♀️",
        (Hindi, Ovulation) => "आप अधिक सामाजिक महसूस कर सकती हैं। 8 गिलास पानी पिएं! 💧",
        (Hindi, Luteal) => "PMS शुरू हो सकता है। सूजन कम करने के लिए नमकीन स्नैक्स से बचें। खीरा खाएं! 🥒",

        (Telugu, Menstrual) => "ఐరన్ స్థాయిలు తగ్గుతాయి. పాలకూర, బెల్లం తినండి. బాగా విశ్రాంతి తీసుకోండి! 🛌",
        (Telugu, Follicular) => "శక్తి పెరుగుతోంది! యోగా లేదా నడక వంటి వ్యాయామాలకు మంచి సమయం. 🧘‍♀️",
        (Telugu, Ovulation) => "శరీరంలో నీటి శాతం ముఖ్యం. 8 గ్లాసుల నీరు తాగడం మర్చిపోవద్దు! 💧",
        (Telugu, Luteal) => "PMS మొదలవ్వచ్చు. ఉప్పు ఎక్కువగా ఉండే ఆహారం తగ్గించండి. దోసకాయ తినండి! 🥒",

        (Tamil, Menstrual) => "இரும்புச்சத்து குறையலாம். கீரை மற்றும் வெல்லம் சாப்பிடுங்கள். ஓய்வு எடுங்கள்! 🛌",
        (Tamil, Follicular) => "ஆற்றல் அதிகரிக்கிறது! யோகா அல்லது நடைப்பயிற்சி செய்ய நல்ல நேரம். 🧘‍♀️",
        (Tamil, Ovulation) => "தண்ணீர் சத்து அவசியம். 8 டம்ளர் தண்ணீர் குடிக்கவும்! 💧",
        (Tamil, Luteal) => "PMS தொடங்கலாம். உப்பு உணவுகளை தவிர்க்கவும். வெள்ளரிக்காய் சாப்பிடுங்கள்! 🥒",

        (Kannada, Menstrual) => "ಕಬ್ಬಿಣದ ಅಂಶ ಕಡಿಮೆಯಾಗಬಹುದು. ಪಾಲಕ್ ಮತ್ತು ಬೆಲ್ಲ ತಿನ್ನಿರಿ. ವಿಶ್ರಾಂತಿ ಪಡೆಯಿರಿ! 🛌",
        (Kannada, Follicular) => "ಶಕ್ತಿ ಹೆಚ್ಚುತ್ತಿದೆ! ಯೋಗ ಅಥವಾ ನಡಿಗೆಗೆ ಇದು ಉತ್ತಮ ಸಮಯ. 🧘‍♀️",
        (Kannada, Ovulation) => "ನೀರು ಚೆನ್ನಾಗಿ ಕುಡಿಯಿರಿ. 8 ಲೋಟ ನೀರು ಕುಡಿಯಿರಿ! 💧",
        (Kannada, Luteal) => "PMS ಪ್ರಾರಂಭವಾಗಬಹುದು. ಉಪ್ಪು ತಿಂಡಿಗಳನ್ನು ತಪ್ಪಿಸಿ. ಸೌತೆಕಾಯಿ ತಿನ್ನಿರಿ! 🥒",
    }
}
