//! Spanish translations (Español)

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "BookFinder");
    m.insert(
        Key::AppTagline,
        "Descubre, explora y guarda tus libros favoritos desde +40 millones de títulos.",
    );

    // Navigation
    m.insert(Key::NavSearch, "Libros");
    m.insert(Key::NavCalendar, "Calendario");

    // Header toggles
    m.insert(Key::ThemeUseDark, "Modo oscuro");
    m.insert(Key::ThemeUseLight, "Modo claro");

    // Search
    m.insert(
        Key::SearchPlaceholder,
        "Ej: El nombre del viento, Dan Brown, 9780307474278...",
    );
    m.insert(Key::SearchButton, "Buscar");
    m.insert(
        Key::SearchHint,
        "Escribe en la barra de búsqueda para comenzar.",
    );
    m.insert(Key::SearchLoading, "Buscando...");
    m.insert(
        Key::SearchNoResults,
        "No encontramos libros con esa búsqueda 😕",
    );
    m.insert(
        Key::SearchError,
        "No pudimos conectar con Google Books. Inténtalo más tarde.",
    );
    m.insert(Key::SearchResultsCount, "{} resultados");

    // Book card
    m.insert(Key::BookUnknownTitle, "Sin título");
    m.insert(Key::BookUnknownAuthor, "Autor desconocido");
    m.insert(Key::BookNoDescription, "Sin descripción disponible.");
    m.insert(Key::BookViewOnGoogle, "Ver en Google Books");

    // Detail panel
    m.insert(Key::DetailDescription, "Descripción");
    m.insert(Key::DetailPublisher, "Editorial");
    m.insert(Key::DetailPublished, "Publicado");
    m.insert(Key::DetailPages, "Páginas");
    m.insert(Key::DetailCategories, "Categorías");
    m.insert(Key::DetailIdentifiers, "Identificadores");
    m.insert(Key::DetailLanguage, "Idioma");
    m.insert(Key::DetailCopyLink, "Copiar enlace");
    m.insert(Key::DetailClose, "Cerrar");

    // Toasts
    m.insert(Key::ToastLinkCopied, "Enlace copiado al portapapeles");
    m.insert(
        Key::ToastSettingsSaveFailed,
        "No se pudo guardar la configuración",
    );

    // Calendar
    m.insert(Key::CalendarTitle, "Calendario");
    m.insert(Key::CalendarToday, "Hoy");
    m.insert(Key::CalendarPrevMonth, "Mes anterior");
    m.insert(Key::CalendarNextMonth, "Mes siguiente");
    m.insert(Key::CalendarStartMonday, "Empezar en lunes");
    m.insert(Key::CalendarStartSunday, "Empezar en domingo");

    // Months
    m.insert(Key::MonthJanuary, "Enero");
    m.insert(Key::MonthFebruary, "Febrero");
    m.insert(Key::MonthMarch, "Marzo");
    m.insert(Key::MonthApril, "Abril");
    m.insert(Key::MonthMay, "Mayo");
    m.insert(Key::MonthJune, "Junio");
    m.insert(Key::MonthJuly, "Julio");
    m.insert(Key::MonthAugust, "Agosto");
    m.insert(Key::MonthSeptember, "Septiembre");
    m.insert(Key::MonthOctober, "Octubre");
    m.insert(Key::MonthNovember, "Noviembre");
    m.insert(Key::MonthDecember, "Diciembre");

    // Weekdays
    m.insert(Key::WeekdayMon, "Lun");
    m.insert(Key::WeekdayTue, "Mar");
    m.insert(Key::WeekdayWed, "Mié");
    m.insert(Key::WeekdayThu, "Jue");
    m.insert(Key::WeekdayFri, "Vie");
    m.insert(Key::WeekdaySat, "Sáb");
    m.insert(Key::WeekdaySun, "Dom");

    // Special days
    m.insert(Key::HolidayNewYear, "Año Nuevo");
    m.insert(Key::HolidayChristmas, "Navidad");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
