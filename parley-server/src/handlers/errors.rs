//! User-facing reply strings
//!
//! The service has a single locale; every string a client sees is Russian.
//! Functions are organized by command for easy lookup.

// ========================================================================
// Credential Errors
// ========================================================================

/// "username and password are required"
pub fn err_credentials_required() -> &'static str {
    "Имя пользователя и пароль обязательны."
}

/// "user already exists"
pub fn err_user_exists() -> &'static str {
    "Пользователь уже существует."
}

/// "invalid password"
pub fn err_invalid_password() -> &'static str {
    "Неверный пароль."
}

/// "user not found"
pub fn err_user_not_found() -> &'static str {
    "Пользователь не найден."
}

// ========================================================================
// Message Errors
// ========================================================================

/// "username and text parameters are required"
pub fn err_message_fields_required() -> &'static str {
    "Параметры username и text обязательны."
}

// ========================================================================
// Protocol and Server Errors
// ========================================================================

/// "unknown action"
pub fn err_unknown_action() -> &'static str {
    "Неизвестное действие."
}

/// "internal server error"
pub fn err_storage() -> &'static str {
    "Внутренняя ошибка сервера."
}

// ========================================================================
// Success Messages
// ========================================================================

/// "registration succeeded"
pub fn msg_registered() -> &'static str {
    "Регистрация прошла успешно."
}

/// "login succeeded"
pub fn msg_logged_in() -> &'static str {
    "Вход выполнен успешно."
}

/// "message sent"
pub fn msg_message_sent() -> &'static str {
    "Сообщение отправлено."
}
