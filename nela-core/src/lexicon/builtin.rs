//! Built-in Arabic lexicons.
//!
//! Compact default word lists used when no lexicon directory is
//! configured. Multi-word entries are single-space separated.

pub static NEGATIVE_WORDS: &[&str] = &[
    "سيء", "سيئة", "كارثة", "كارثي", "فشل", "خطر", "خطير", "خطيرة", "عنيف", "عنيفة",
    "أزمة", "حزين", "حزينة", "مؤلم", "فساد", "ظلم", "خسارة", "كراهية", "غضب", "تردي",
    "شغب", "قتل", "دمار", "ضعيف", "مخيف", "انهيار", "فوضى", "معاناة", "مأساة", "سلبي",
];

pub static POSITIVE_WORDS: &[&str] = &[
    "جميل", "جميلة", "رائع", "رائعة", "نجاح", "ممتاز", "ممتازة", "سعيد", "سعيدة", "سعادة",
    "أمل", "تقدم", "فوز", "حب", "خير", "أفضل", "مفيد", "ازدهار", "سلام", "إيجابي",
    "إنجاز", "تحسن", "فرح", "آمن", "مستقر", "نمو", "تفاؤل", "عظيم", "متميز", "ناجح",
];

pub static NEUTRAL_WORDS: &[&str] = &[
    "عادي", "عادية", "متوسط", "متوسطة", "مقبول", "معتاد", "طبيعي", "طبيعية", "محايد",
    "اعتيادي", "معتدل", "ثابت", "متوازن", "روتيني", "مألوف",
];

pub static BIAS_WORDS: &[&str] = &[
    "متطرف", "متطرفة", "إرهابي", "إرهابية", "عميل", "عملاء", "خائن", "خونة", "بطل",
    "أبطال", "شهيد", "شهداء", "ميليشيا", "مرتزقة", "مزعوم", "مزعومة", "فاشل", "مشبوه",
    "عصابة", "عصابات", "الطغمة", "النظام", "الاحتلال", "غزاة", "مجرم", "مجرمين",
];

pub static ASSERTATIVES: &[&str] = &[
    "أكد", "يؤكد", "أكدت", "تؤكد", "زعم", "يزعم", "زعمت", "ادعى", "يدعي", "ادعت",
    "افترض", "يفترض", "اقترح", "يقترح", "ضمن", "يضمن", "جزم", "يجزم", "أقر", "يقر",
    "توقع", "يتوقع", "أصر", "يصر", "شدد", "يشدد",
];

pub static FACTIVES: &[&str] = &[
    "يعرف", "عرف", "أدرك", "يدرك", "اكتشف", "يكتشف", "لاحظ", "يلاحظ", "تذكر", "يتذكر",
    "ندم", "يندم", "اعترف", "يعترف", "كشف", "يكشف", "تبين", "اتضح", "علم", "يعلم",
];

pub static HEDGES: &[&str] = &[
    "ربما", "قد", "يبدو", "يبدو أن", "محتمل", "احتمال", "تقريبا", "نوعا ما", "على ما يبدو",
    "من الممكن", "من المحتمل", "إلى حد ما", "حوالي", "نحو", "أحيانا", "غالبا", "يعتقد",
    "يظن", "يرجح", "على الأرجح", "في الغالب", "بشكل ما", "ليس من الواضح", "لعل",
];

pub static IMPLICATIVES: &[&str] = &[
    "تمكن", "يتمكن", "استطاع", "يستطيع", "نجح", "ينجح", "تجنب", "يتجنب", "رفض", "يرفض",
    "اضطر", "يضطر", "تردد", "يتردد", "حاول", "يحاول", "نسي", "ينسى", "أجبر", "يجبر",
    "سمح", "يسمح", "تعمد", "يتعمد",
];

pub static REPORT_VERBS: &[&str] = &[
    "قال", "يقول", "قالت", "أضاف", "يضيف", "أوضح", "يوضح", "أفاد", "يفيد", "صرح",
    "يصرح", "ذكر", "يذكر", "أعلن", "يعلن", "أشار", "يشير", "نقل", "روى", "كتب",
    "نفى", "ينفي", "وصف", "يصف", "اعتبر", "يعتبر", "أكد", "يؤكد",
];
