pub mod common {
    pub const LOADING: &str = "טוען...";
    pub const SAVE: &str = "שמור";
    pub const SAVING: &str = "שומר...";
    pub const CANCEL: &str = "ביטול";
    pub const EDIT: &str = "ערוך";
    pub const DELETE: &str = "מחק";
    pub const DELETING: &str = "מוחק...";
    pub const EMPTY: &str = "אין פריטים כרגע";
}

pub mod loading_spinner {
    pub const ARIA_LABEL: &str = "טוען";
}

pub mod error_banner {
    pub const TITLE: &str = "שגיאה";
    pub const CLOSE_ARIA: &str = "סגור הודעת שגיאה";
}

pub mod hero {
    pub const TITLE: &str = "הצלה שמצילה חיים";
    pub const SUBTITLE: &str = "סניף איחוד הצלה שוהם - שירותי חירום מקדמיים ותגובה מהירה לעת קריאה";
    pub const CTA: &str = "תרומה מצילת חיים";
}

pub mod about {
    pub const TITLE: &str = "על סניף שוהם";
    pub const DESCRIPTION: &str = "סניף איחוד הצלה בשוהם משמש כשומר מלאך לתושבי העיר והסביבה. אנחנו מתנדבים מוקדשים, מיומנים ויציבים, הזמינים 24/7 להגיע לחירום בכל שעה של היום והלילה.";
    pub const VALUES: [(&str, &str, &str); 3] = [
        ("💪", "מסירות", "נמסור את הנפש בשביל חיי התושבים"),
        ("⚡", "מהירות", "תגובה מיידית בכל שעה ובכל מקום"),
        ("🤝", "שיתוף פעולה", "עבודה בשיתוף הקהילה וגופים אחרים"),
    ];
}

pub mod statistics {
    pub const TITLE: &str = "הנתונים שלנו";
}

pub mod stories {
    pub const TITLE: &str = "סיפורי הצלה מהשטח";
    pub const PREV_ARIA: &str = "סיפור קודם";
    pub const NEXT_ARIA: &str = "סיפור הבא";
    pub const GOTO_ARIA_TEMPLATE: &str = "עבור לסיפור {}";
}

pub mod gallery {
    pub const TITLE: &str = "גלריית מדיה";
}

pub mod donors {
    pub const TITLE: &str = "תורמים וחסויות";
}

pub mod donation {
    pub const TITLE: &str = "תרומה מצילת חיים";
    pub const SUBTITLE: &str = "כל תרומה חשובה לנו ועוזרת לצוות שלנו להצליח בחירום";
    pub const CUSTOM_LABEL: &str = "או הזן סכום אחר:";
    pub const CUSTOM_PLACEHOLDER: &str = "סכום בש״ח";
    pub const CUSTOM_ARIA: &str = "סכום תרומה מותאם";
    pub const SECURITY_NOTE: &str = "התרומה מאובטחת בהצפנה SSL חזקה";
    pub const SUBMIT: &str = "תרומה מהירה";
    pub const SUBMIT_ARIA: &str = "שלח תרומה";
    pub const THANKS_TITLE: &str = "תודה על התרומה!";
    pub const THANKS_BODY: &str = "התרומה שלך התקבלה בהצלחה";
    pub const INVALID_AMOUNT: &str = "יש להזין סכום חיובי";
}

pub mod contact {
    pub const TITLE: &str = "יצירת קשר";
    pub const PHONE: &str = "📞 טלפון";
    pub const EMAIL: &str = "📧 דוא״ל";
    pub const ADDRESS: &str = "📍 כתובת";
    pub const EMERGENCY: &str = "🚑 מוקד חירום";
    pub const FOLLOW: &str = "📱 עקבו אחרינו";
    pub const FACEBOOK_ARIA: &str = "פייסבוק";
    pub const INSTAGRAM_ARIA: &str = "אינסטגרם";
    pub const WHATSAPP_ARIA: &str = "וואטסאפ";
    pub const NAME_LABEL: &str = "שם מלא";
    pub const EMAIL_LABEL: &str = "דוא״ל";
    pub const MESSAGE_LABEL: &str = "הודעה";
    pub const SUBMIT: &str = "שלח הודעה";
    pub const SENDING: &str = "שולח...";
    pub const SENT: &str = "ההודעה נשלחה, נחזור אליך בהקדם";
    pub const MISSING_FIELD: &str = "יש למלא את כל השדות";
    pub const INVALID_EMAIL: &str = "כתובת הדוא״ל אינה תקינה";
}

pub mod footer {
    pub const ABOUT_HEADING: &str = "אודות";
    pub const ABOUT_LINKS: [(&str, &str); 3] =
        [("#about", "על הסניף"), ("#stories", "סיפורי הצלה"), ("#contact", "יצירת קשר")];
    pub const COMMUNITY_HEADING: &str = "קהילה";
    pub const COMMUNITY_LINKS: [(&str, &str); 2] =
        [("#donate", "תרומה לסניף"), ("#gallery", "גלריה")];
    pub const COPYRIGHT_TEMPLATE: &str = "© {} סניף איחוד הצלה שוהם. כל הזכויות שמורות.";
    pub const CREDITS: &str = "עוצב וייושם עם ❤️ לשמירה על חיים";
}

pub mod login {
    pub const HEADING: &str = "פאנל ניהול";
    pub const SUBHEADING: &str = "איחוד הצלה שוהם";
    pub const TITLE: &str = "כניסה לניהול";
    pub const SUBTITLE: &str = "התחבר עם חשבון Google שלך כדי לנהל את האתר";
    pub const GOOGLE_BUTTON_ARIA: &str = "התחברות עם Google";
    pub const GOOGLE_DISABLED: &str = "התחברות Google אינה מוגדרת בגרסה זו";
    pub const FAILED_TEMPLATE: &str = "נכשל בהתחברות: {}";
    pub const NOT_ADMIN_TEMPLATE: &str = "החשבון {} אינו מורשה לניהול";
    pub const SIGN_OUT: &str = "התנתק";
    pub const SIGNING_IN: &str = "מתחבר...";
    pub const MOCK_LABEL: &str = "📌 מצב פיתוח - התחברות ללא אימות:";
    pub const MOCK_BUTTON: &str = "התחברות כמנהל (Mock)";
    pub const FOOTER: &str = "רק מנהלים מורשים יכולים להיכנס לפאנל זה";
}

pub mod admin {
    pub const TITLE: &str = "פאנל ניהול";
    pub const GREETING_TEMPLATE: &str = "שלום, {}";
    pub const LOGOUT: &str = "התנתק";
    pub const BACK_TO_SITE: &str = "חזרה לאתר";
    pub const ADD: &str = "+ הוסף";
    pub const NEW_ITEM: &str = "פריט חדש";
    pub const EDIT_ITEM: &str = "עריכת פריט";
    pub const CONFIRM_DELETE: &str = "האם אתה בטוח שברצונך למחוק?";
    pub const SAVED: &str = "נשמר בהצלחה!";
    pub const DELETED: &str = "נמחק בהצלחה";
    pub const UPLOADED: &str = "התמונה הועלתה";
    pub const UPLOAD_LABEL: &str = "העלאת תמונה";
    pub const UPLOADING: &str = "מעלה תמונה...";
    pub const NO_STATISTICS: &str = "אין סטטיסטיקות זמינות";
    pub const MESSAGES_TAB_TEMPLATE: &str = "הודעות ({})";
    pub const INFO_TAB: &str = "פרטי קשר";
    pub const MESSAGES_HEADING: &str = "הודעות יצירת קשר";
    pub const NO_MESSAGES: &str = "אין הודעות כרגע";
    pub const INFO_HEADING: &str = "עדכון פרטי קשר";
    pub const SOCIAL_HEADING: &str = "רשתות חברתיות";
    pub const INFO_SAVED: &str = "פרטי הקשר עודכנו בהצלחה!";
}

pub mod tabs {
    pub const GALLERY: &str = "גלריה";
    pub const STORIES: &str = "סיפורים";
    pub const STATISTICS: &str = "סטטיסטיקות";
    pub const CONTACT: &str = "יצירת קשר";
    pub const ADMINS: &str = "מנהלים";
    pub const DONATIONS: &str = "תרומות";
    pub const SPONSORS: &str = "תורמים";
}

pub mod fields {
    pub fn label(name: &str) -> &'static str {
        match name {
            "title" => "כותרת",
            "category" => "קטגוריה",
            "imageUrl" => "קישור לתמונה",
            "description" => "תיאור",
            "date" => "תאריך",
            "volunteersCount" => "מספר מתנדבים",
            "emergencyCalls" => "קריאות חירום",
            "averageResponseTime" => "זמן תגובה ממוצע",
            "uptime" => "זמינות %",
            "email" => "אימייל",
            "name" => "שם מלא",
            "picture" => "קישור לתמונה (אופציונלי)",
            "status" => "סטטוס",
            "phone" => "טלפון",
            "address" => "כתובת",
            "emergencyNumber" => "מספר חירום",
            "facebook" => "Facebook",
            "instagram" => "Instagram",
            "whatsapp" => "WhatsApp",
            "amount" => "סכום",
            "donorEmail" => "אימייל התורם",
            "message" => "הודעה",
            "subject" => "נושא",
            "createdAt" => "התקבל",
            "addedAt" => "נוסף",
            "addedBy" => "נוסף על ידי",
            _ => "",
        }
    }

    pub fn status(value: &str) -> &'static str {
        match value {
            "pending" => "בהמתנה",
            "read" => "נקרא",
            "replied" => "נענה",
            "completed" => "הושלם",
            "failed" => "נכשל",
            _ => "",
        }
    }
}

pub mod not_found {
    pub const TITLE: &str = "404 - הדף לא נמצא";
    pub const BODY: &str = "מצטערים, הדף שחיפשת אינו קיים.";
    pub const HOME_LINK: &str = "חזרה לדף הבית";
}
