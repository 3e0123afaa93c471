/*
word_bank.rs

Copyright 2025 Hervé Quatremain

This file is part of Sopa.

Sopa is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Sopa is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Sopa. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Hand-authored themes and their translations.
//!
//! Themes are authored in Spanish, the canonical language.
//! Each translation table maps a canonical word to its form in the display language.
//! Translations must stay unique within a table, so that a displayed word always maps back to
//! exactly one canonical word.

use crate::language::AppLanguage;

// For developers: add new themes at the end of this list. Inserting a theme elsewhere changes
// the puzzles of all the following days.
pub const HAND_AUTHORED_THEMES: [&[&str]; 3] = [
    // Nature
    &[
        "ARBOL", "TIERRA", "NUBE", "MAR", "SOL", "RIO", "FLOR", "LUNA", "MONTE", "VALLE",
        "BOSQUE", "RAMA", "ROCA", "PLAYA", "NIEVE", "VIENTO", "TRUENO", "FUEGO", "ARENA", "ISLA",
        "CIELO", "SELVA", "LLUVIA", "CAMINO", "MUSGO", "LAGO", "PRIMAVERA", "HORIZONTE",
        "ESTRELLA", "PLANETA",
    ],
    // Food
    &[
        "QUESO", "PAN", "MIEL", "LECHE", "UVA", "PERA", "CAFE", "TOMATE", "ACEITE", "SAL",
        "PASTA", "ARROZ", "PAPAYA", "MANGO", "BANANA", "NARANJA", "CEREZA", "SOPA", "TORTILLA",
        "GALLETA", "CHOCOLATE", "YOGUR", "MANZANA", "AVENA", "ENSALADA", "PIMIENTO", "LIMON",
        "COCO", "ALMENDRA", "ALBAHACA",
    ],
    // City
    &[
        "TREN", "BUS", "CARRO", "PUERTA", "PLAYA", "LIBRO", "CINE", "PUENTE", "CALLE", "METRO",
        "AVION", "BARRIO", "PLAZA", "PARQUE", "TORRE", "MUSEO", "MAPA", "RUTA", "BICICLETA",
        "TRAFICO", "SEMAFORO", "ESTACION", "AUTOPISTA", "TAXI", "MOTOR", "VIAJE", "MOCHILA",
        "PASEO", "CIUDAD", "CARTEL",
    ],
];

const ENGLISH: &[(&str, &str)] = &[
    ("ACEITE", "OIL"),
    ("ALBAHACA", "BASIL"),
    ("ALMENDRA", "ALMOND"),
    ("ARBOL", "TREE"),
    ("ARENA", "SAND"),
    ("ARROZ", "RICE"),
    ("AUTOPISTA", "HIGHWAY"),
    ("AVENA", "OATMEAL"),
    ("AVION", "AIRPLANE"),
    ("BANANA", "BANANA"),
    ("BARRIO", "DISTRICT"),
    ("BICICLETA", "BICYCLE"),
    ("BOSQUE", "FOREST"),
    ("BUS", "BUS"),
    ("CAFE", "COFFEE"),
    ("CALLE", "STREET"),
    ("CAMINO", "PATH"),
    ("CARRO", "CAR"),
    ("CARTEL", "SIGN"),
    ("CEREZA", "CHERRY"),
    ("CHOCOLATE", "CHOCOLATE"),
    ("CIELO", "SKY"),
    ("CINE", "CINEMA"),
    ("CIUDAD", "CITY"),
    ("COCO", "COCONUT"),
    ("ENSALADA", "SALAD"),
    ("ESTACION", "STATION"),
    ("ESTRELLA", "STAR"),
    ("FLOR", "FLOWER"),
    ("FUEGO", "FIRE"),
    ("GALLETA", "COOKIE"),
    ("HORIZONTE", "HORIZON"),
    ("ISLA", "ISLAND"),
    ("LAGO", "LAKE"),
    ("LECHE", "MILK"),
    ("LIBRO", "BOOK"),
    ("LIMON", "LEMON"),
    ("LLUVIA", "RAIN"),
    ("LUNA", "MOON"),
    ("MANGO", "MANGO"),
    ("MANZANA", "APPLE"),
    ("MAPA", "MAP"),
    ("MAR", "OCEAN"),
    ("METRO", "SUBWAY"),
    ("MIEL", "HONEY"),
    ("MOCHILA", "BACKPACK"),
    ("MONTE", "HILL"),
    ("MOTOR", "ENGINE"),
    ("MUSEO", "MUSEUM"),
    ("MUSGO", "MOSS"),
    ("NARANJA", "ORANGE"),
    ("NIEVE", "SNOW"),
    ("NUBE", "CLOUD"),
    ("PAN", "BREAD"),
    ("PAPAYA", "PAPAYA"),
    ("PARQUE", "PARK"),
    ("PASEO", "WALK"),
    ("PASTA", "PASTA"),
    ("PERA", "PEAR"),
    ("PIMIENTO", "PEPPER"),
    ("PLANETA", "PLANET"),
    ("PLAYA", "BEACH"),
    ("PLAZA", "SQUARE"),
    ("PRIMAVERA", "SPRING"),
    ("PUENTE", "BRIDGE"),
    ("PUERTA", "DOOR"),
    ("QUESO", "CHEESE"),
    ("RAMA", "BRANCH"),
    ("RIO", "RIVER"),
    ("ROCA", "ROCK"),
    ("RUTA", "ROUTE"),
    ("SAL", "SALT"),
    ("SELVA", "JUNGLE"),
    ("SEMAFORO", "SIGNAL"),
    ("SOL", "SUN"),
    ("SOPA", "SOUP"),
    ("TAXI", "TAXI"),
    ("TIERRA", "EARTH"),
    ("TOMATE", "TOMATO"),
    ("TORRE", "TOWER"),
    ("TORTILLA", "OMELET"),
    ("TRAFICO", "TRAFFIC"),
    ("TREN", "TRAIN"),
    ("TRUENO", "THUNDER"),
    ("UVA", "GRAPE"),
    ("VALLE", "VALLEY"),
    ("VIAJE", "TRAVEL"),
    ("VIENTO", "WIND"),
    ("YOGUR", "YOGURT"),
];

const FRENCH: &[(&str, &str)] = &[
    ("ACEITE", "HUILE"),
    ("ALBAHACA", "BASILIC"),
    ("ALMENDRA", "AMANDE"),
    ("ARBOL", "ARBRE"),
    ("ARENA", "SABLE"),
    ("ARROZ", "RIZ"),
    ("AUTOPISTA", "AUTOROUTE"),
    ("AVENA", "AVOINE"),
    ("AVION", "AVION"),
    ("BANANA", "BANANE"),
    ("BARRIO", "QUARTIER"),
    ("BICICLETA", "VELO"),
    ("BOSQUE", "FORÊT"),
    ("BUS", "BUS"),
    ("CAFE", "CAFÉ"),
    ("CALLE", "RUE"),
    ("CAMINO", "CHEMIN"),
    ("CARRO", "VOITURE"),
    ("CARTEL", "AFFICHE"),
    ("CEREZA", "CERISE"),
    ("CHOCOLATE", "CHOCOLAT"),
    ("CIELO", "CIEL"),
    ("CINE", "CINÉMA"),
    ("CIUDAD", "VILLE"),
    ("COCO", "COCO"),
    ("ENSALADA", "SALADE"),
    ("ESTACION", "GARE"),
    ("ESTRELLA", "ÉTOILE"),
    ("FLOR", "FLEUR"),
    ("FUEGO", "FEU"),
    ("GALLETA", "BISCUIT"),
    ("HORIZONTE", "HORIZON"),
    ("ISLA", "ÎLE"),
    ("LAGO", "LAC"),
    ("LECHE", "LAIT"),
    ("LIBRO", "LIVRE"),
    ("LIMON", "CITRON"),
    ("LLUVIA", "PLUIE"),
    ("LUNA", "LUNE"),
    ("MANGO", "MANGUE"),
    ("MANZANA", "POMME"),
    ("MAPA", "CARTE"),
    ("MAR", "MER"),
    ("METRO", "MÉTRO"),
    ("MIEL", "MIEL"),
    ("MOCHILA", "SAC"),
    ("MONTE", "COLLINE"),
    ("MOTOR", "MOTEUR"),
    ("MUSEO", "MUSÉE"),
    ("MUSGO", "MOUSSE"),
    ("NARANJA", "ORANGE"),
    ("NIEVE", "NEIGE"),
    ("NUBE", "NUAGE"),
    ("PAN", "PAIN"),
    ("PAPAYA", "PAPAYE"),
    ("PARQUE", "PARC"),
    ("PASEO", "BALADE"),
    ("PASTA", "PÂTES"),
    ("PERA", "POIRE"),
    ("PIMIENTO", "POIVRON"),
    ("PLANETA", "PLANÈTE"),
    ("PLAYA", "PLAGE"),
    ("PLAZA", "PLACE"),
    ("PRIMAVERA", "PRINTEMPS"),
    ("PUENTE", "PONT"),
    ("PUERTA", "PORTE"),
    ("QUESO", "FROMAGE"),
    ("RAMA", "BRANCHE"),
    ("RIO", "RIVIÈRE"),
    ("ROCA", "ROCHER"),
    ("RUTA", "ROUTE"),
    ("SAL", "SEL"),
    ("SELVA", "JUNGLE"),
    ("SEMAFORO", "SIGNAL"),
    ("SOL", "SOLEIL"),
    ("SOPA", "SOUPE"),
    ("TAXI", "TAXI"),
    ("TIERRA", "TERRE"),
    ("TOMATE", "TOMATE"),
    ("TORRE", "TOUR"),
    ("TORTILLA", "OMELETTE"),
    ("TRAFICO", "TRAFIC"),
    ("TREN", "TRAIN"),
    ("TRUENO", "TONNERRE"),
    ("UVA", "RAISIN"),
    ("VALLE", "VALLÉE"),
    ("VIAJE", "VOYAGE"),
    ("VIENTO", "VENT"),
    ("YOGUR", "YAOURT"),
];

const PORTUGUESE: &[(&str, &str)] = &[
    ("ACEITE", "AZEITE"),
    ("ALBAHACA", "ALFAVACA"),
    ("ALMENDRA", "AMÊNDOA"),
    ("ARBOL", "ÁRVORE"),
    ("ARENA", "AREIA"),
    ("ARROZ", "ARROZ"),
    ("AUTOPISTA", "RODOVIA"),
    ("AVENA", "AVEIA"),
    ("AVION", "AVIÃO"),
    ("BANANA", "BANANA"),
    ("BARRIO", "BAIRRO"),
    ("BICICLETA", "BICICLETA"),
    ("BOSQUE", "FLORESTA"),
    ("BUS", "ÔNIBUS"),
    ("CAFE", "CAFÉ"),
    ("CALLE", "RUA"),
    ("CAMINO", "CAMINHO"),
    ("CARRO", "CARRO"),
    ("CARTEL", "PLACA"),
    ("CEREZA", "CEREJA"),
    ("CHOCOLATE", "CHOCOLATE"),
    ("CIELO", "CÉU"),
    ("CINE", "CINEMA"),
    ("CIUDAD", "CIDADE"),
    ("COCO", "COCO"),
    ("ENSALADA", "SALADA"),
    ("ESTACION", "ESTAÇÃO"),
    ("ESTRELLA", "ESTRELA"),
    ("FLOR", "FLOR"),
    ("FUEGO", "FOGO"),
    ("GALLETA", "BOLACHA"),
    ("HORIZONTE", "HORIZONTE"),
    ("ISLA", "ILHA"),
    ("LAGO", "LAGO"),
    ("LECHE", "LEITE"),
    ("LIBRO", "LIVRO"),
    ("LIMON", "LIMÃO"),
    ("LLUVIA", "CHUVA"),
    ("LUNA", "LUA"),
    ("MANGO", "MANGA"),
    ("MANZANA", "MAÇÃ"),
    ("MAPA", "MAPA"),
    ("MAR", "MAR"),
    ("METRO", "METRÔ"),
    ("MIEL", "MEL"),
    ("MOCHILA", "MOCHILA"),
    ("MONTE", "MORRO"),
    ("MOTOR", "MOTOR"),
    ("MUSEO", "MUSEU"),
    ("MUSGO", "MUSGO"),
    ("NARANJA", "LARANJA"),
    ("NIEVE", "NEVE"),
    ("NUBE", "NUVEM"),
    ("PAN", "PÃO"),
    ("PAPAYA", "MAMÃO"),
    ("PARQUE", "PARQUE"),
    ("PASEO", "PASSEIO"),
    ("PASTA", "MASSA"),
    ("PERA", "PERA"),
    ("PIMIENTO", "PIMENTÃO"),
    ("PLANETA", "PLANETA"),
    ("PLAYA", "PRAIA"),
    ("PLAZA", "PRAÇA"),
    ("PRIMAVERA", "PRIMAVERA"),
    ("PUENTE", "PONTE"),
    ("PUERTA", "PORTA"),
    ("QUESO", "QUEIJO"),
    ("RAMA", "GALHO"),
    ("RIO", "RIO"),
    ("ROCA", "ROCHA"),
    ("RUTA", "ROTA"),
    ("SAL", "SAL"),
    ("SELVA", "SELVA"),
    ("SEMAFORO", "SEMÁFORO"),
    ("SOL", "SOL"),
    ("SOPA", "SOPA"),
    ("TAXI", "TÁXI"),
    ("TIERRA", "TERRA"),
    ("TOMATE", "TOMATE"),
    ("TORRE", "TORRE"),
    ("TORTILLA", "OMELETE"),
    ("TRAFICO", "TRÂNSITO"),
    ("TREN", "TREM"),
    ("TRUENO", "TROVÃO"),
    ("UVA", "UVA"),
    ("VALLE", "VALE"),
    ("VIAJE", "VIAGEM"),
    ("VIENTO", "VENTO"),
    ("YOGUR", "IOGURTE"),
];

/// Return the translation table of the given language, as (canonical, translated) pairs.
///
/// The canonical language has no table.
pub fn translations(language: AppLanguage) -> &'static [(&'static str, &'static str)] {
    match language {
        AppLanguage::Spanish => &[],
        AppLanguage::English => ENGLISH,
        AppLanguage::French => FRENCH,
        AppLanguage::Portuguese => PORTUGUESE,
    }
}
