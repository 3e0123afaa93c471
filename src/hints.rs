/*
hints.rs

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

//! Word hints.
//!
//! The list of words to find can show either the words themselves or a short definition of each
//! word.
//! Definitions are written in Spanish, for the canonical words. A word in another language is
//! first mapped back to its canonical word.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;
use strum_macros::{Display, FromRepr};

use crate::generator::normalize::normalize;
use crate::generator::themes::ThemeRegistry;

/// Text shown when a word has no definition.
pub const MISSING_DEFINITION: &str = "Sin definición";

/// How the words to find are shown.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Display,
    Default,
)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WordHintMode {
    #[default]
    Word,
    Definition,
}

const DEFINITIONS: &[(&str, &str)] = &[
    ("ARBOL", "Planta grande con tronco y ramas."),
    ("TIERRA", "Suelo donde crecen las plantas."),
    ("NUBE", "Masa de vapor de agua en el cielo."),
    ("MAR", "Gran extension de agua salada."),
    ("SOL", "Estrella que ilumina la Tierra."),
    ("RIO", "Corriente natural de agua."),
    ("FLOR", "Parte de la planta que produce semillas."),
    ("LUNA", "Satelite natural de la Tierra."),
    ("MONTE", "Elevacion natural del terreno."),
    ("VALLE", "Zona baja entre montes."),
    ("BOSQUE", "Conjunto denso de arboles."),
    ("RAMA", "Parte del arbol que sale del tronco."),
    ("ROCA", "Piedra grande y dura."),
    ("PLAYA", "Orilla de arena junto al mar."),
    ("NIEVE", "Agua congelada que cae del cielo."),
    ("VIENTO", "Movimiento del aire."),
    ("TRUENO", "Sonido fuerte tras un rayo."),
    ("FUEGO", "Combustion que produce calor y luz."),
    ("ARENA", "Granitos que forman playas o desiertos."),
    ("ISLA", "Tierra rodeada de agua."),
    ("CIELO", "Espacio visible sobre la Tierra."),
    ("SELVA", "Bosque tropical muy denso."),
    ("LLUVIA", "Agua que cae de las nubes."),
    ("CAMINO", "Via o senda para ir de un lugar a otro."),
    ("MUSGO", "Planta pequena que crece en lugares humedos."),
    ("LAGO", "Cuerpo de agua interior."),
    ("PRIMAVERA", "Estacion del anio entre invierno y verano."),
    ("HORIZONTE", "Linea donde parece unirse cielo y tierra."),
    ("ESTRELLA", "Cuerpo celeste que emite luz."),
    ("PLANETA", "Cuerpo que orbita una estrella."),
    ("QUESO", "Lacteo curado o fresco hecho de leche."),
    ("PAN", "Alimento horneado a base de harina."),
    ("MIEL", "Sustancia dulce producida por abejas."),
    ("LECHE", "Liquido blanco nutritivo de mamiferos."),
    ("UVA", "Fruto pequeno que crece en racimos."),
    ("PERA", "Fruta dulce de forma alargada."),
    ("CAFE", "Bebida hecha con granos tostados."),
    ("TOMATE", "Fruto rojo usado en ensaladas y salsas."),
    ("ACEITE", "Liquido graso usado para cocinar."),
    ("SAL", "Condimento mineral que realza el sabor."),
    ("PASTA", "Masa alimenticia de harina y agua."),
    ("ARROZ", "Cereal en grano muy usado en comidas."),
    ("PAPAYA", "Fruta tropical de pulpa naranja."),
    ("MANGO", "Fruta tropical dulce y jugosa."),
    ("BANANA", "Fruta alargada y amarilla."),
    ("NARANJA", "Fruta citrica redonda y dulce."),
    ("CEREZA", "Fruta pequena roja con hueso."),
    ("SOPA", "Comida liquida y caliente."),
    ("TORTILLA", "Preparacion de huevo o de masa de maiz."),
    ("GALLETA", "Dulce horneado y crujiente."),
    ("CHOCOLATE", "Dulce hecho con cacao."),
    ("YOGUR", "Lacteo fermentado y cremoso."),
    ("MANZANA", "Fruta redonda y crujiente."),
    ("AVENA", "Cereal usado en desayunos."),
    ("ENSALADA", "Mezcla de vegetales frescos."),
    ("PIMIENTO", "Hortaliza de piel lisa y colorida."),
    ("LIMON", "Fruta citrica muy acida."),
    ("COCO", "Fruto tropical con cascara dura."),
    ("ALMENDRA", "Semilla comestible con cascara dura."),
    ("ALBAHACA", "Hierba aromatica usada en cocina."),
    ("TREN", "Vehiculo que va sobre vias."),
    ("BUS", "Vehiculo grande para pasajeros."),
    ("CARRO", "Vehiculo de cuatro ruedas."),
    ("PUERTA", "Elemento que abre o cierra un paso."),
    ("LIBRO", "Conjunto de paginas encuadernadas."),
    ("CINE", "Lugar para ver peliculas."),
    ("PUENTE", "Estructura que cruza un rio o via."),
    ("CALLE", "Via urbana entre edificios."),
    ("METRO", "Transporte subterraneo en ciudades."),
    ("AVION", "Vehiculo que vuela."),
    ("BARRIO", "Zona de una ciudad con identidad propia."),
    ("PLAZA", "Espacio publico abierto en la ciudad."),
    ("PARQUE", "Area verde para ocio."),
    ("TORRE", "Construccion alta y estrecha."),
    ("MUSEO", "Lugar donde se exhibe arte o historia."),
    ("MAPA", "Representacion grafica de un lugar."),
    ("RUTA", "Camino planificado para ir a un destino."),
    ("BICICLETA", "Vehiculo de dos ruedas con pedales."),
    ("TRAFICO", "Circulacion de vehiculos."),
    ("SEMAFORO", "Senal luminosa para regular el paso."),
    ("ESTACION", "Lugar de salida y llegada de transporte."),
    ("AUTOPISTA", "Via rapida de varios carriles."),
    ("TAXI", "Vehiculo de servicio publico individual."),
    ("MOTOR", "Maquina que genera movimiento."),
    ("VIAJE", "Desplazamiento de un lugar a otro."),
    ("MOCHILA", "Bolso que se lleva en la espalda."),
    ("PASEO", "Actividad de caminar o recorrer."),
    ("CIUDAD", "Asentamiento grande y urbano."),
    ("CARTEL", "Placa o anuncio con informacion."),
];

/// Definitions indexed by canonical word, built on first use.
fn definitions() -> &'static HashMap<&'static str, &'static str> {
    static DEFINITIONS_LOCK: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    DEFINITIONS_LOCK.get_or_init(|| DEFINITIONS.iter().copied().collect())
}

/// Return the definition of a word given in any display language.
pub fn definition(registry: &ThemeRegistry, word: &str) -> Option<&'static str> {
    let normalized: String = normalize(word);
    let canonical: &str = registry
        .canonical_word(&normalized)
        .unwrap_or(normalized.as_str());
    definitions().get(canonical).copied()
}

/// Return the text to show for the word in the list of words to find.
pub fn display_text(registry: &ThemeRegistry, word: &str, mode: WordHintMode) -> String {
    match mode {
        WordHintMode::Word => normalize(word),
        WordHintMode::Definition => definition(registry, word)
            .unwrap_or(MISSING_DEFINITION)
            .to_string(),
    }
}
