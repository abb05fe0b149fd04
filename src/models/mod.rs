// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Description:
//   Point d'entrée pour tous les modèles de données.
//   Chaque modèle correspond à une table avec SeaORM.
//
// Liste des modules:
//   - bid_list : Enchères (table bidlist)
//   - curve_point : Points de courbe (table curvepoint)
//   - rating : Notations Moody's / S&P / Fitch (table rating)
//   - rule_name : Règles de trading (table rulename)
//   - trade : Transactions (table trade)
//   - users : Utilisateurs et rôles ADMIN / USER (table users)
//   - dto : Formulaires HTML + validation déclarative
//
// Points d'attention:
//   - Aucune relation entre les tables
//   - Les id sont générés par la BD et ne changent jamais
//   - Les champs d'audit (creation_*, revision_*) ne sont jamais modifiés par update
//
// ============================================================================

pub mod bid_list;
pub mod curve_point;
pub mod dto;
pub mod rating;
pub mod rule_name;
pub mod trade;
pub mod users;
