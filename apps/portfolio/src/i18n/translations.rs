pub(super) const EN: &[(&str, &str)] = &[
    // Header
    ("header.home", "Home"),
    ("header.experience", "Experience"),
    ("header.skills", "Skills"),
    ("header.education", "Education"),
    ("header.contact", "Contact"),
    ("header.downloadCV", "Download CV"),
    ("header.admin", "Admin"),
    // Sections
    ("experience.title", "Professional Experience"),
    ("skills.title", "Skills & Expertise"),
    ("skills.technical", "Technical Skills"),
    ("skills.industry", "Industry Experience"),
    ("education.title", "Education & Languages"),
    ("education.section", "Education"),
    ("education.languages", "Languages"),
    ("education.hobbies", "Interests & Hobbies"),
    ("education.certifications", "Achievements & Highlights"),
    // Admin
    ("admin.title", "CV Management"),
    ("admin.description", "Upload and manage your CV file"),
    ("admin.changePassword", "Change Password"),
    ("admin.logout", "Logout"),
    ("admin.uploadNew", "Upload New CV"),
    ("admin.selectFile", "Select a PDF file to upload as your new CV"),
    ("admin.selectedFile", "Selected:"),
    ("admin.uploadCV", "Upload CV"),
    ("admin.uploading", "Uploading..."),
    ("admin.currentCV", "Current CV"),
    ("admin.file", "File:"),
    ("admin.size", "Size:"),
    ("admin.lastUpdated", "Last Updated:"),
    ("admin.downloadCV", "Download CV"),
    ("admin.deleteCV", "Delete CV"),
    (
        "admin.deleteConfirm",
        "Are you sure you want to delete the current CV? This action cannot be undone.",
    ),
    ("admin.noCVUploaded", "No CV uploaded yet"),
    ("admin.fileCount", "Files:"),
    ("admin.selectPDFError", "Please select a PDF file"),
    ("admin.selectFileFirst", "Please select a file first"),
    ("admin.uploadSuccess", "CV uploaded successfully!"),
    ("admin.uploadFailed", "Upload failed"),
    ("admin.noToken", "No authentication token found"),
    ("admin.deleting", "Deleting..."),
    ("admin.deleteSuccess", "CV deleted successfully!"),
    ("admin.deleteFailed", "Failed to delete CV"),
    (
        "admin.deleteConnectionFailed",
        "Failed to delete CV. Please check your connection.",
    ),
    // Password
    ("password.title", "Change Password"),
    ("password.current", "Current Password:"),
    ("password.new", "New Password:"),
    ("password.confirm", "Confirm New Password:"),
    ("password.change", "Change Password"),
    ("password.changing", "Changing..."),
    ("password.mismatch", "New passwords do not match"),
    (
        "password.tooShort",
        "New password must be at least 8 characters long",
    ),
    ("password.changingStatus", "Changing password..."),
    ("password.success", "Password changed successfully!"),
    ("password.failed", "Password change failed"),
    (
        "password.connectionFailed",
        "Password change failed. Please check your connection.",
    ),
    (
        "password.firstLoginHint",
        "You are still using the initial password. Please change it.",
    ),
    // Login
    ("login.title", "Admin Login"),
    ("login.username", "Username"),
    ("login.password", "Password"),
    ("login.signIn", "Sign In"),
    ("login.signingIn", "Signing in..."),
    ("login.success", "Logged in"),
    ("login.required", "Not logged in. Please log in first."),
    (
        "login.connectionFailed",
        "Connection failed. Make sure the backend server is running.",
    ),
    ("login.loggedOut", "Logged out"),
    // Common
    ("common.loading", "Loading..."),
    ("common.error", "Error"),
    ("common.success", "Success"),
    ("common.mb", "MB"),
];

pub(super) const SR: &[(&str, &str)] = &[
    // Header
    ("header.home", "Почетна"),
    ("header.experience", "Искуство"),
    ("header.skills", "Вештине"),
    ("header.education", "Образовање"),
    ("header.contact", "Контакт"),
    ("header.downloadCV", "Преузми CV"),
    ("header.admin", "Админ"),
    // Sections
    ("experience.title", "Професионално искуство"),
    ("skills.title", "Вештине и експертиза"),
    ("skills.technical", "Техничке вештине"),
    ("skills.industry", "Индустријско искуство"),
    ("education.title", "Образовање и језици"),
    ("education.section", "Образовање"),
    ("education.languages", "Језици"),
    ("education.hobbies", "Интересовања и хобији"),
    ("education.certifications", "Достигнућа и истакнути резултати"),
    // Admin
    ("admin.title", "Управљање CV-ом"),
    ("admin.description", "Отпремите и управљајте вашим CV фајлом"),
    ("admin.changePassword", "Промени лозинку"),
    ("admin.logout", "Одјави се"),
    ("admin.uploadNew", "Отпреми нови CV"),
    ("admin.selectFile", "Изаберите PDF фајл за отпремање као ваш нови CV"),
    ("admin.selectedFile", "Изабрано:"),
    ("admin.uploadCV", "Отпреми CV"),
    ("admin.uploading", "Отпремање..."),
    ("admin.currentCV", "Тренутни CV"),
    ("admin.file", "Фајл:"),
    ("admin.size", "Величина:"),
    ("admin.lastUpdated", "Последњи пут ажурирано:"),
    ("admin.downloadCV", "Преузми CV"),
    ("admin.deleteCV", "Обриши CV"),
    (
        "admin.deleteConfirm",
        "Да ли сте сигурни да желите да обришете тренутни CV? Ова акција се не може опозвати.",
    ),
    ("admin.noCVUploaded", "Још увек није отпремљен CV"),
    ("admin.fileCount", "Фајлови:"),
    ("admin.selectPDFError", "Молимо изаберите PDF фајл"),
    ("admin.selectFileFirst", "Молимо прво изаберите фајл"),
    ("admin.uploadSuccess", "CV успешно отпремљен!"),
    ("admin.uploadFailed", "Отпремање није успело"),
    ("admin.noToken", "Токен за аутентификацију није пронађен"),
    ("admin.deleting", "Брисање..."),
    ("admin.deleteSuccess", "CV успешно обрисан!"),
    ("admin.deleteFailed", "Брисање CV-а није успело"),
    (
        "admin.deleteConnectionFailed",
        "Брисање CV-а није успело. Проверите везу.",
    ),
    // Password
    ("password.title", "Промени лозинку"),
    ("password.current", "Тренутна лозинка:"),
    ("password.new", "Нова лозинка:"),
    ("password.confirm", "Потврди нову лозинку:"),
    ("password.change", "Промени лозинку"),
    ("password.changing", "Мењање..."),
    ("password.mismatch", "Нове лозинке се не поклапају"),
    ("password.tooShort", "Нова лозинка мора имати најмање 8 карактера"),
    ("password.changingStatus", "Мењање лозинке..."),
    ("password.success", "Лозинка успешно промењена!"),
    ("password.failed", "Промена лозинке није успела"),
    (
        "password.connectionFailed",
        "Промена лозинке није успела. Проверите везу.",
    ),
    (
        "password.firstLoginHint",
        "Још увек користите почетну лозинку. Молимо промените је.",
    ),
    // Login
    ("login.title", "Админ пријава"),
    ("login.username", "Корисничко име"),
    ("login.password", "Лозинка"),
    ("login.signIn", "Пријави се"),
    ("login.signingIn", "Пријављивање..."),
    ("login.success", "Пријављени сте"),
    ("login.required", "Нисте пријављени. Молимо прво се пријавите."),
    (
        "login.connectionFailed",
        "Повезивање није успело. Проверите да ли је сервер покренут.",
    ),
    ("login.loggedOut", "Одјављени сте"),
    // Common
    ("common.loading", "Учитавање..."),
    ("common.error", "Грешка"),
    ("common.success", "Успешно"),
    ("common.mb", "MB"),
];
