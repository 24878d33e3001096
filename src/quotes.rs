use crate::models::Quote;
use chrono::{Datelike, NaiveDate};

pub const QUOTES: &[Quote] = &[
    Quote {
        text: "El éxito representa el 1% de tu trabajo, y es el resultado del otro 99%, que llamamos fracaso",
        author: "Soichiro Honda - Fundador de Honda",
    },
    Quote {
        text: "La disciplina es el puente entre las metas y los logros",
        author: "Jim Rohn",
    },
    Quote {
        text: "No es que sea muy inteligente, es que me quedo más tiempo con los problemas",
        author: "Albert Einstein",
    },
    Quote {
        text: "El único lugar donde el éxito viene antes que el trabajo es en el diccionario",
        author: "Vidal Sassoon",
    },
    Quote {
        text: "La diferencia entre lo imposible y lo posible está en la determinación",
        author: "Tommy Lasorda",
    },
    Quote {
        text: "Cada día es una nueva oportunidad para ser mejor que ayer",
        author: "Desconocido",
    },
    Quote {
        text: "El progreso no es casualidad, es el resultado de un esfuerzo constante",
        author: "Mahatma Gandhi",
    },
    Quote {
        text: "La consistencia es más importante que la perfección",
        author: "Desconocido",
    },
    Quote {
        text: "Tu cuerpo puede soportar casi cualquier cosa, es tu mente la que necesitas convencer",
        author: "Desconocido",
    },
    Quote {
        text: "El fitness no es un destino, es un estilo de vida",
        author: "Desconocido",
    },
    Quote {
        text: "Los pequeños progresos diarios son la clave del éxito a largo plazo",
        author: "Robert Collier",
    },
    Quote {
        text: "La motivación te hace empezar, el hábito te hace continuar",
        author: "Jim Ryun",
    },
    Quote {
        text: "No cuentes los días, haz que los días cuenten",
        author: "Muhammad Ali",
    },
    Quote {
        text: "El esfuerzo de hoy es la inversión del mañana",
        author: "Desconocido",
    },
    Quote {
        text: "La excelencia no es una habilidad, es una actitud",
        author: "Ralph Marston",
    },
    Quote {
        text: "No puedes crecer sin dolor. No puedes ganar sin sufrimiento. No puedes cambiar sin incomodidad",
        author: "David Goggins",
    },
    Quote {
        text: "La mente es la herramienta más poderosa que tienes. Úsala para tu beneficio, no para tu destrucción",
        author: "David Goggins",
    },
    Quote {
        text: "No te rindas cuando estés cansado. Ríndete cuando hayas terminado",
        author: "David Goggins",
    },
    Quote {
        text: "El dolor es temporal. El orgullo es para siempre",
        author: "David Goggins",
    },
    Quote {
        text: "No puedes cambiar tu pasado, pero puedes cambiar tu futuro",
        author: "David Goggins",
    },
    Quote {
        text: "La disciplina es la diferencia entre lo que quieres ahora y lo que quieres más",
        author: "David Goggins",
    },
    Quote {
        text: "No te rindas. Sufre ahora y vive el resto de tu vida como un campeón",
        author: "Muhammad Ali",
    },
    Quote {
        text: "El dolor es temporal. Puede durar un minuto, una hora, un día, o un año, pero eventualmente se detendrá y algo más tomará su lugar. Si me rindo, sin embargo, durará para siempre",
        author: "Lance Armstrong",
    },
    Quote {
        text: "Si quieres algo que nunca has tenido, debes estar dispuesto a hacer algo que nunca has hecho",
        author: "Thomas Jefferson",
    },
    Quote {
        text: "El éxito no es final, el fracaso no es fatal: es el coraje para continuar lo que cuenta",
        author: "Winston Churchill",
    },
    Quote {
        text: "La diferencia entre lo ordinario y lo extraordinario es ese pequeño extra",
        author: "Jimmy Johnson",
    },
    Quote {
        text: "No hay ascensor al éxito, tienes que tomar las escaleras",
        author: "Zig Ziglar",
    },
    Quote {
        text: "El futuro pertenece a quienes creen en la belleza de sus sueños",
        author: "Eleanor Roosevelt",
    },
    Quote {
        text: "La única manera de hacer un gran trabajo es amar lo que haces",
        author: "Steve Jobs",
    },
    Quote {
        text: "No importa qué tan lento vayas, siempre y cuando no te detengas",
        author: "Confucio",
    },
    Quote {
        text: "El éxito es ir de fracaso en fracaso sin perder el entusiasmo",
        author: "Winston Churchill",
    },
    Quote {
        text: "La mente es todo. Lo que piensas te conviertes en eso",
        author: "Buda",
    },
    Quote {
        text: "El único límite para nuestros logros de mañana serán nuestras dudas de hoy",
        author: "Franklin D. Roosevelt",
    },
    Quote {
        text: "La vida es 10% lo que te pasa y 90% cómo reaccionas a ello",
        author: "Charles R. Swindoll",
    },
    Quote {
        text: "No puedes cambiar tu destino, pero puedes cambiar tu dirección",
        author: "Jim Rohn",
    },
    Quote {
        text: "El coraje no es la ausencia de miedo, sino el juicio de que algo más es más importante que el miedo",
        author: "Ambrose Redmoon",
    },
    Quote {
        text: "La persistencia es muy importante. No debes renunciar a menos que te veas forzado a renunciar",
        author: "Elon Musk",
    },
    Quote {
        text: "La calidad no es un acto, es un hábito",
        author: "Aristóteles",
    },
    Quote {
        text: "El verdadero test no es si evitas el fracaso, porque no lo harás. Es si dejas que te endurezca o te avergüence en la inacción, o si aprendes de él",
        author: "Barack Obama",
    },
    Quote {
        text: "No hay atajos para cualquier lugar que valga la pena ir",
        author: "Beverly Sills",
    },
    Quote {
        text: "El éxito es la suma de pequeños esfuerzos repetidos día tras día",
        author: "Robert Collier",
    },
    Quote {
        text: "La determinación de hoy es el éxito de mañana",
        author: "Robert H. Schuller",
    },
    Quote {
        text: "No hay sustituto para el trabajo duro",
        author: "Thomas Edison",
    },
    Quote {
        text: "La excelencia es un hábito, no un acto",
        author: "Aristóteles",
    },
];

/// Quote shown on `date`, rotating through the table by day of year.
pub fn quote_for(date: NaiveDate) -> Quote {
    QUOTES[date.ordinal() as usize % QUOTES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_day_same_quote() {
        let date = NaiveDate::from_ymd_opt(2026, 5, 17).unwrap();
        assert_eq!(quote_for(date), quote_for(date));
    }

    #[test]
    fn consecutive_days_rotate() {
        let first = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let second = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(quote_for(first), QUOTES[1]);
        assert_eq!(quote_for(second), QUOTES[2]);
    }

    #[test]
    fn index_wraps_around_table() {
        let date = NaiveDate::from_yo_opt(2026, QUOTES.len() as u32).unwrap();
        assert_eq!(quote_for(date), QUOTES[0]);
    }

    #[test]
    fn table_has_no_blank_entries() {
        assert!(QUOTES.iter().all(|q| !q.text.is_empty() && !q.author.is_empty()));
    }
}
