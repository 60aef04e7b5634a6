use super::Language;

translations! {
    // Header
    AppTitle => { en: "3D Model Generator", ru: "Генератор 3D Моделей", be: "Генератар 3D-мадэляў" },
    AppPowered => { en: "Powered by Hyper3D Rodin", ru: "Работает на Hyper3D Rodin", be: "Працуе на Hyper3D Rodin" },
    AppWebsite => { en: "Website", ru: "Веб-сайт", be: "Вэб-сайт" },
    AppDocs => { en: "API Docs", ru: "API Документация", be: "API Дакументацыя" },

    // Prompt form
    FormPlaceholder => { en: "Generate 3D model...", ru: "Сгенерировать 3D модель...", be: "Згенераваць 3D-мадэль..." },
    FormDropImages => { en: "Drop images here", ru: "Перетащите изображения сюда", be: "Перацягніце выявы сюды" },
    FormMaxImages => {
        en: "You can upload a maximum of 5 images",
        ru: "Вы можете загрузить максимум 5 изображений",
        be: "Вы можаце загрузіць максімум 5 выяў",
    },
    FormAddImages => { en: "Add images", ru: "Добавить изображения", be: "Дадаць выявы" },
    FormRemoveImage => { en: "Remove image", ru: "Удалить изображение", be: "Выдаліць выяву" },
    FormSubmit => { en: "Generate", ru: "Сгенерировать", be: "Згенераваць" },

    // Options dialog
    OptionsTitle => { en: "Options", ru: "Настройки", be: "Налады" },
    OptionsBasic => { en: "Basic Settings", ru: "Основные настройки", be: "Асноўныя налады" },
    OptionsAdvanced => { en: "Advanced", ru: "Расширенные", be: "Пашыраныя" },
    OptionsQuality => { en: "Quality", ru: "Качество", be: "Якасць" },
    QualityHigh => { en: "High (50k)", ru: "Высокое (50k)", be: "Высокая (50к)" },
    QualityMedium => { en: "Medium (18k)", ru: "Среднее (18k)", be: "Сярэдняя (18к)" },
    QualityLow => { en: "Low (8k)", ru: "Низкое (8k)", be: "Нізкая (8к)" },
    QualityExtraLow => { en: "Extra Low (4k)", ru: "Очень низкое (4k)", be: "Вельмі нізкая (4к)" },
    OptionsFormat => { en: "Format", ru: "Формат", be: "Фармат" },
    OptionsUseHyper => { en: "Use Hyper", ru: "Использовать Hyper", be: "Выкарыстоўваць Hyper" },
    OptionsUseHyperDesc => { en: "Better details", ru: "Лучшие детали", be: "Лепшыя дэталі" },
    OptionsTaPose => { en: "T/A Pose", ru: "T/A Поза", be: "T/A Паза" },
    OptionsTaPoseDesc => { en: "For humans", ru: "Для людей", be: "Для людзей" },
    OptionsConditionMode => { en: "Condition Mode", ru: "Режим условий", be: "Рэжым умоў" },
    ConditionConcat => {
        en: "Concat (Single object, multiple views)",
        ru: "Объединение (Один объект, несколько ракурсов)",
        be: "Аб'яднанне (Адзін аб'ект, некалькі ракурсаў)",
    },
    ConditionFuse => { en: "Fuse (Multiple objects)", ru: "Слияние (Несколько объектов)", be: "Зліццё (Некалькі аб'ектаў)" },
    OptionsMaterial => { en: "Material", ru: "Материал", be: "Матэрыял" },
    OptionsTier => { en: "Generation Tier", ru: "Уровень генерации", be: "Узровень генерацыі" },
    TierRegular => { en: "Regular (Quality)", ru: "Обычный (Качество)", be: "Звычайны (Якасць)" },
    TierSketch => { en: "Sketch (Speed)", ru: "Эскиз (Скорость)", be: "Эскіз (Хуткасць)" },
    OptionsApply => { en: "Apply Settings", ru: "Применить настройки", be: "Ужыць налады" },

    // Result controls
    ControlsBack => { en: "Back", ru: "Назад", be: "Назад" },
    ControlsDownload => { en: "Download", ru: "Скачать", be: "Спампаваць" },
    ControlsViewInAr => { en: "View in AR", ru: "Смотреть в AR", be: "Глядзець у AR" },
    ControlsCustomize => { en: "Customize", ru: "Настроить", be: "Наладзіць" },

    // Material customization
    CustomizeTitle => { en: "Texture Customization", ru: "Настройка текстуры", be: "Налада тэкстуры" },
    CustomizeColor => { en: "Color", ru: "Цвет", be: "Колер" },
    CustomizeRoughness => { en: "Roughness", ru: "Шероховатость", be: "Шурпатасць" },
    CustomizeMetalness => { en: "Metalness", ru: "Металличность", be: "Металічнасць" },
    CustomizeApply => { en: "Apply", ru: "Применить", be: "Ужыць" },
    CustomizeCancel => { en: "Cancel", ru: "Отмена", be: "Адмена" },
    CustomizeUnavailable => {
        en: "The model is not ready for customization yet",
        ru: "Модель ещё не готова к настройке",
        be: "Мадэль яшчэ не гатовая да налады",
    },

    // Status
    StatusGenerating => { en: "Generating model...", ru: "Генерация модели...", be: "Генерацыя мадэлі..." },
    StatusSubmitting => { en: "Submitting request...", ru: "Отправка запроса...", be: "Адпраўка запыту..." },

    // Errors
    ErrorSubmit => { en: "Generation request failed", ru: "Не удалось отправить запрос", be: "Не атрымалася адправіць запыт" },
    ErrorStatus => { en: "Status check failed", ru: "Ошибка проверки статуса", be: "Памылка праверкі статусу" },
    ErrorDownload => { en: "Failed to download model", ru: "Не удалось скачать модель", be: "Не атрымалася спампаваць мадэль" },
    ErrorGeneration => { en: "Generation task failed", ru: "Задача генерации не выполнена", be: "Задача генерацыі не выканана" },
    ErrorNoGlb => { en: "No GLB file found in the results", ru: "GLB файл не найден в результатах", be: "GLB файл не знойдзены ў выніках" },
    ErrorNoFiles => {
        en: "No files available for download",
        ru: "Нет доступных файлов для скачивания",
        be: "Няма даступных файлаў для спампавання",
    },
    ErrorNoJobs => {
        en: "No jobs found in status response",
        ru: "В ответе о статусе нет задач",
        be: "У адказе пра статус няма задач",
    },
    ErrorNetwork => { en: "Network error", ru: "Ошибка сети", be: "Памылка сеткі" },
    ErrorUnexpected => {
        en: "Unexpected response from the server",
        ru: "Неожиданный ответ сервера",
        be: "Нечаканы адказ сервера",
    },
    ErrorTimeout => {
        en: "Generation is taking too long, please try again",
        ru: "Генерация занимает слишком много времени, попробуйте снова",
        be: "Генерацыя займае занадта шмат часу, паспрабуйце зноў",
    },

    // Language switcher
    LanguageTitle => { en: "Language", ru: "Язык", be: "Мова" },
    LanguageEn => { en: "English", ru: "English", be: "English" },
    LanguageRu => { en: "Русский", ru: "Русский", be: "Русский" },
    LanguageBe => { en: "Беларуская", ru: "Беларуская", be: "Беларуская" },

    // Theme switcher
    ThemeTitle => { en: "Theme", ru: "Тема", be: "Тэма" },
    ThemeSwitchToLight => { en: "Switch to light theme", ru: "Переключить на светлую тему", be: "Пераключыць на светлую тэму" },
    ThemeSwitchToDark => { en: "Switch to dark theme", ru: "Переключить на темную тему", be: "Пераключыць на цёмную тэму" },
    ThemeLight => { en: "Light", ru: "Светлая", be: "Светлая" },
    ThemeDark => { en: "Dark", ru: "Темная", be: "Цёмная" },

    // Authentication
    AuthSignIn => { en: "Sign In", ru: "Войти", be: "Увайсці" },
    AuthSignUp => { en: "Sign Up", ru: "Регистрация", be: "Рэгістрацыя" },
    AuthEmail => { en: "Email", ru: "Email", be: "Email" },
    AuthPassword => { en: "Password", ru: "Пароль", be: "Пароль" },
    AuthConfirmPassword => { en: "Confirm Password", ru: "Подтвердите пароль", be: "Пацвердзіце пароль" },
    AuthName => { en: "Name", ru: "Имя", be: "Імя" },
    AuthNamePlaceholder => { en: "John Doe", ru: "Иван Иванов", be: "Іван Іваноў" },
    AuthInvalidCredentials => { en: "Invalid email or password", ru: "Неверный email или пароль", be: "Няправільны email або пароль" },
    AuthSignInError => { en: "Failed to sign in", ru: "Не удалось войти", be: "Не атрымалася ўвайсці" },
    AuthSignUpError => { en: "Error creating account", ru: "Ошибка при создании аккаунта", be: "Памылка пры стварэнні акаўнта" },
    AuthSigningIn => { en: "Signing in...", ru: "Вход...", be: "Уваход..." },
    AuthSigningUp => { en: "Signing up...", ru: "Регистрация...", be: "Рэгістрацыя..." },
    AuthSignOut => { en: "Sign Out", ru: "Выйти", be: "Выйсці" },
    AuthForgotPassword => { en: "Forgot password?", ru: "Забыли пароль?", be: "Забылі пароль?" },
    AuthResetPassword => { en: "Reset Password", ru: "Сбросить пароль", be: "Скінуць пароль" },
    AuthResetInstructions => {
        en: "Enter your email address and we'll send you a link to reset your password",
        ru: "Введите ваш email, и мы отправим вам ссылку для сброса пароля",
        be: "Увядзіце ваш email, і мы адправім вам спасылку для скіду пароля",
    },
    AuthSendResetLink => { en: "Send Reset Link", ru: "Отправить ссылку для сброса", be: "Адправіць спасылку для скіду" },
    AuthSending => { en: "Sending...", ru: "Отправка...", be: "Адпраўка..." },
    AuthResetLinkSent => {
        en: "Password reset link has been sent to your email",
        ru: "Ссылка для сброса пароля была отправлена на ваш email",
        be: "Спасылка для скіду пароля была адпраўлена на ваш email",
    },
    AuthResetError => {
        en: "Failed to send reset link",
        ru: "Не удалось отправить ссылку для сброса",
        be: "Не атрымалася адправіць спасылку для скіду",
    },
    AuthSignUpSuccessConfirmEmail => {
        en: "Account created successfully! Please check your email to confirm your registration.",
        ru: "Аккаунт успешно создан! Пожалуйста, проверьте вашу почту для подтверждения регистрации.",
        be: "Акаўнт паспяхова створаны! Калі ласка, праверце вашу пошту для пацверджання рэгістрацыі.",
    },
    AuthEmailExists => { en: "Email is already registered", ru: "Email уже зарегистрирован", be: "Email ужо зарэгістраваны" },
    AuthEmailNotConfirmed => {
        en: "Email not confirmed. Please check your inbox and confirm your email.",
        ru: "Email не подтвержден. Пожалуйста, проверьте вашу почту и подтвердите email.",
        be: "Email не пацверджаны. Калі ласка, праверце вашу пошту і пацвердзіце email.",
    },
    AuthResendConfirmationEmail => {
        en: "Resend confirmation email",
        ru: "Отправить письмо с подтверждением повторно",
        be: "Адправіць ліст з пацверджаннем паўторна",
    },
    AuthConfirmationEmailResent => {
        en: "Confirmation email has been resent. Please check your inbox.",
        ru: "Письмо с подтверждением отправлено повторно. Пожалуйста, проверьте вашу почту.",
        be: "Ліст з пацверджаннем адпраўлены паўторна. Калі ласка, праверце вашу пошту.",
    },
    AuthResendError => {
        en: "Failed to resend verification code",
        ru: "Не удалось повторно отправить код подтверждения",
        be: "Не атрымалася паўторна адправіць код пацверджання",
    },
    AuthPasswordMismatch => { en: "Passwords do not match", ru: "Пароли не совпадают", be: "Паролі не супадаюць" },
    AuthPasswordTooShort => {
        en: "Password must be at least 6 characters",
        ru: "Пароль должен содержать не менее 6 символов",
        be: "Пароль павінен змяшчаць не менш за 6 сімвалаў",
    },
    AuthNotAuthenticated => { en: "Please sign in first", ru: "Сначала войдите в аккаунт", be: "Спачатку ўвайдзіце ў акаўнт" },
    AuthSessionExpired => { en: "Your session has expired. Please sign in again.", ru: "Сеанс истёк. Пожалуйста, войдите снова.", be: "Сеанс скончыўся. Калі ласка, увайдзіце зноў." },
    AuthBack => { en: "Back", ru: "Назад", be: "Назад" },
    AuthCancel => { en: "Cancel", ru: "Отмена", be: "Адмена" },

    // User menu
    UserAccount => { en: "Account", ru: "Аккаунт", be: "Акаўнт" },
    UserSaveModel => { en: "Save Model", ru: "Сохранить модель", be: "Захаваць мадэль" },
    UserMyModels => { en: "My Models", ru: "Мои модели", be: "Мае мадэлі" },
    UserProfile => { en: "Profile", ru: "Профиль", be: "Профіль" },

    // Save model dialog
    SaveModelTitle => { en: "Save Model", ru: "Сохранить модель", be: "Захаваць мадэль" },
    SaveModelName => { en: "Model Name", ru: "Название модели", be: "Назва мадэлі" },
    SaveModelNamePlaceholder => { en: "My Awesome Model", ru: "Моя крутая модель", be: "Мая крутая мадэль" },
    SaveModelDescription => { en: "Description", ru: "Описание", be: "Апісанне" },
    SaveModelDescriptionPlaceholder => {
        en: "A brief description of your model",
        ru: "Краткое описание вашей модели",
        be: "Кароткае апісанне вашай мадэлі",
    },
    SaveModelSave => { en: "Save", ru: "Сохранить", be: "Захаваць" },
    SaveModelSaving => { en: "Saving...", ru: "Сохранение...", be: "Захаванне..." },
    SaveModelCancel => { en: "Cancel", ru: "Отмена", be: "Адмена" },
    SaveModelSuccess => { en: "Model saved successfully!", ru: "Модель успешно сохранена!", be: "Мадэль паспяхова захавана!" },
    SaveModelError => { en: "Failed to save model", ru: "Не удалось сохранить модель", be: "Не атрымалася захаваць мадэль" },
    SaveModelNoModel => { en: "No model to save", ru: "Нет модели для сохранения", be: "Няма мадэлі для захавання" },
    SaveModelNameRequired => { en: "Name is required", ru: "Необходимо указать название", be: "Неабходна ўказаць назву" },

    // Saved models list
    ModelsEmpty => { en: "You have no saved models yet", ru: "У вас пока нет сохраненных моделей", be: "У вас пакуль няма захаваных мадэляў" },
    ModelsOpen => { en: "Open", ru: "Открыть", be: "Адкрыць" },
    ModelsDelete => { en: "Delete", ru: "Удалить", be: "Выдаліць" },
    ModelsLoadError => { en: "Failed to load models", ru: "Не удалось загрузить модели", be: "Не атрымалася загрузіць мадэлі" },
    ModelsDeleteError => { en: "Failed to delete model", ru: "Не удалось удалить модель", be: "Не атрымалася выдаліць мадэль" },

    // Profile dialog
    ProfileTitle => { en: "Profile", ru: "Профиль", be: "Профіль" },
    ProfileName => { en: "Name", ru: "Имя", be: "Імя" },
    ProfileNamePlaceholder => { en: "Your name", ru: "Ваше имя", be: "Ваша імя" },
    ProfileEmail => { en: "Email", ru: "Email", be: "Email" },
    ProfileEmailReadOnly => { en: "Email cannot be changed", ru: "Email нельзя изменить", be: "Email нельга змяніць" },
    ProfileSave => { en: "Save", ru: "Сохранить", be: "Захаваць" },
    ProfileSaving => { en: "Saving...", ru: "Сохранение...", be: "Захаванне..." },
    ProfileCancel => { en: "Cancel", ru: "Отмена", be: "Адмена" },
    ProfileUpdateSuccess => { en: "Profile updated successfully", ru: "Профиль успешно обновлен", be: "Профіль паспяхова абноўлены" },
    ProfileUpdateError => { en: "Failed to update profile", ru: "Не удалось обновить профиль", be: "Не атрымалася абнавіць профіль" },
    ProfileNameRequired => { en: "Name is required", ru: "Имя обязательно", be: "Імя абавязкова" },
}
